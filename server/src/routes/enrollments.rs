//! Enrollment listing and progress routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use super::auth::{AuthUser, MaybeUser};
use super::error::ApiError;
use crate::services::enrollment::{self, Enrollment, EnrollmentFilter, EnrollmentUpdate};
use crate::state::AppState;

/// `GET /api/enrollments?userId=&courseId=`: scoped to the caller unless
/// they are an admin.
pub async fn list_enrollments(
    State(state): State<AppState>,
    MaybeUser(viewer): MaybeUser,
    Query(filter): Query<EnrollmentFilter>,
) -> Result<Json<Vec<Enrollment>>, ApiError> {
    let Some(filter) = enrollment::scoped_filter(viewer.as_ref(), filter) else {
        return Ok(Json(Vec::new()));
    };
    Ok(Json(enrollment::list_enrollments(&state.pool, filter).await?))
}

/// `PUT /api/enrollments/{id}`
pub async fn update_enrollment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<EnrollmentUpdate>,
) -> Result<Json<Enrollment>, ApiError> {
    Ok(Json(enrollment::update_enrollment(&state.pool, &auth.user, id, body).await?))
}

/// `DELETE /api/enrollments/{id}`
pub async fn delete_enrollment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    enrollment::delete_enrollment(&state.pool, &auth.user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
