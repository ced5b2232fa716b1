//! Admin account management.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::auth::AdminUser;
use super::error::ApiError;
use crate::services::user::{self, Role, User};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RoleBody {
    pub role: Role,
}

/// `GET /api/users`
pub async fn list_users(State(state): State<AppState>, _admin: AdminUser) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(user::list_users(&state.pool).await?))
}

/// `PUT /api/users/{id}`: change an account's role.
pub async fn update_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<Uuid>,
    Json(body): Json<RoleBody>,
) -> Result<Json<User>, ApiError> {
    let updated = user::update_role(&state.pool, id, body.role).await?;
    tracing::info!(user_id = %id, role = body.role.as_str(), by = %admin.id, "role changed");
    Ok(Json(updated))
}

/// `DELETE /api/users/{id}`
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    user::delete_user(&state.pool, &admin, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
