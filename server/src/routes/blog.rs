//! Blog post routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use uuid::Uuid;

use super::auth::{AuthUser, MaybeUser};
use super::error::ApiError;
use crate::services::blog::{self, BlogPost, PostFilter, PostInput, PostPatch};
use crate::state::AppState;

/// `GET /api/blog?category=&search=&published=true&sortBy=`
pub async fn list_posts(
    State(state): State<AppState>,
    MaybeUser(viewer): MaybeUser,
    Query(filter): Query<PostFilter>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    Ok(Json(blog::list_posts(&state.pool, viewer.as_ref(), &filter).await?))
}

/// `POST /api/blog`
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<PostInput>,
) -> Result<impl IntoResponse, ApiError> {
    let post = blog::create_post(&state.pool, &auth.user, body).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// `GET /api/blog/{id}`: counts a view.
pub async fn get_post(
    State(state): State<AppState>,
    MaybeUser(viewer): MaybeUser,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogPost>, ApiError> {
    Ok(Json(blog::get_post(&state.pool, viewer.as_ref(), id).await?))
}

/// `PUT /api/blog/{id}`: partial update.
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<PostPatch>,
) -> Result<Json<BlogPost>, ApiError> {
    Ok(Json(blog::update_post(&state.pool, &auth.user, id, body).await?))
}

/// `DELETE /api/blog/{id}`
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    blog::delete_post(&state.pool, &auth.user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
