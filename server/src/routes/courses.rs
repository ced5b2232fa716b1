//! Course catalog and enrollment routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use serde::Serialize;
use uuid::Uuid;

use super::auth::AuthUser;
use super::error::ApiError;
use crate::services::course::{self, Course, CourseFilter, CourseInput, CoursePatch};
use crate::services::enrollment::{self, Enrollment};
use crate::state::AppState;

#[derive(Serialize)]
pub struct EnrollResponse {
    pub enrollment: Enrollment,
    pub course: Course,
}

/// `GET /api/courses?category=&level=&search=`
pub async fn list_courses(
    State(state): State<AppState>,
    Query(filter): Query<CourseFilter>,
) -> Result<Json<Vec<Course>>, ApiError> {
    Ok(Json(course::list_courses(&state.pool, &filter).await?))
}

/// `POST /api/courses`
pub async fn create_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CourseInput>,
) -> Result<impl IntoResponse, ApiError> {
    let created = course::create_course(&state.pool, &auth.user, body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/courses/{id}`
pub async fn get_course(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Course>, ApiError> {
    Ok(Json(course::get_course(&state.pool, id).await?))
}

/// `PUT /api/courses/{id}`: partial update.
pub async fn update_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<CoursePatch>,
) -> Result<Json<Course>, ApiError> {
    Ok(Json(course::update_course(&state.pool, &auth.user, id, body).await?))
}

/// `DELETE /api/courses/{id}`
pub async fn delete_course(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    course::delete_course(&state.pool, &auth.user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/courses/{id}/enroll`: enroll the signed-in user.
pub async fn enroll(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let (enrollment, course) = enrollment::enroll(&state.pool, &auth.user, id).await?;
    Ok((StatusCode::CREATED, Json(EnrollResponse { enrollment, course })))
}
