//! Comment routes, nested under their post, plus the moderation list.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Deserialize;
use uuid::Uuid;

use super::auth::{AuthUser, MaybeUser};
use super::error::ApiError;
use crate::services::blog;
use crate::services::comment::{self, Comment, CommentInput};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ContentBody {
    pub content: String,
}

/// `GET /api/comments`: every visible comment; admins see all of them.
pub async fn list_all(
    State(state): State<AppState>,
    MaybeUser(viewer): MaybeUser,
) -> Result<Json<Vec<Comment>>, ApiError> {
    Ok(Json(comment::list_all(&state.pool, viewer.as_ref()).await?))
}

/// `GET /api/blog/{id}/comments`
pub async fn list_for_post(
    State(state): State<AppState>,
    MaybeUser(viewer): MaybeUser,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    blog::ensure_visible(&state.pool, viewer.as_ref(), post_id).await?;
    Ok(Json(comment::list_for_post(&state.pool, post_id).await?))
}

/// `POST /api/blog/{id}/comments`
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<Uuid>,
    Json(body): Json<CommentInput>,
) -> Result<impl IntoResponse, ApiError> {
    blog::ensure_visible(&state.pool, Some(&auth.user), post_id).await?;
    let created = comment::create_comment(&state.pool, &auth.user, post_id, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/blog/{id}/comments/{cid}`
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((post_id, id)): Path<(Uuid, Uuid)>,
    Json(body): Json<ContentBody>,
) -> Result<Json<Comment>, ApiError> {
    Ok(Json(comment::update_comment(&state.pool, &auth.user, post_id, id, &body.content).await?))
}

/// `DELETE /api/blog/{id}/comments/{cid}`
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((post_id, id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    comment::delete_comment(&state.pool, &auth.user, post_id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
