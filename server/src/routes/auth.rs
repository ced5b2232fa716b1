//! Auth routes: password registration and login, logout, own profile.

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use time::Duration;

use super::error::ApiError;
use crate::services::auth::{self as auth_svc, Credentials, Registration};
use crate::services::session;
use crate::services::user::{self, ProfileUpdate, User};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

/// Session token from the cookie, else from an `Authorization: Bearer` header.
pub(crate) fn request_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(token) = jar.get(COOKIE_NAME).map(Cookie::value).filter(|v| !v.is_empty()) {
        return Some(token.to_owned());
    }
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(session::SESSION_LIFETIME)
        .build()
}

fn cleared_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// EXTRACTORS
// =============================================================================

/// Authenticated user. Use as a handler parameter to require a session.
pub struct AuthUser {
    pub user: User,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = request_token(&parts.headers).ok_or_else(ApiError::unauthorized)?;
        let app_state = AppState::from_ref(state);
        let user = session::lookup(&app_state.pool, &token)
            .await?
            .ok_or_else(ApiError::unauthorized)?;
        Ok(Self { user })
    }
}

/// Signed-in user if the request carries a live session, else `None`.
pub struct MaybeUser(pub Option<User>);

impl<S> FromRequestParts<S> for MaybeUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = request_token(&parts.headers) else {
            return Ok(Self(None));
        };
        let app_state = AppState::from_ref(state);
        Ok(Self(session::lookup(&app_state.pool, &token).await?))
    }
}

/// Admin account. Non-admin sessions are rejected with 403.
pub struct AdminUser(pub User);

impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser { user } = AuthUser::from_request_parts(parts, state).await?;
        if user.is_admin() { Ok(Self(user)) } else { Err(ApiError::forbidden()) }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
    pub message: &'static str,
}

/// `POST /api/auth/register`: create an account and sign it in.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<Registration>,
) -> Result<impl IntoResponse, ApiError> {
    let user = auth_svc::register(&state.pool, body).await?;
    let token = session::open(&state.pool, user.id).await?;
    let jar = jar.add(session_cookie(token.clone(), state.cookie_secure));
    let body = AuthResponse { user, token, message: "Account created successfully" };
    Ok((StatusCode::CREATED, jar, Json(body)))
}

/// `POST /api/auth/login`: check credentials and start a session.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<Credentials>,
) -> Result<impl IntoResponse, ApiError> {
    let user = auth_svc::login(&state.pool, &body).await?;
    let token = session::open(&state.pool, user.id).await?;
    tracing::info!(user_id = %user.id, "login");
    let jar = jar.add(session_cookie(token.clone(), state.cookie_secure));
    Ok((jar, Json(AuthResponse { user, token, message: "Login successful" })))
}

/// `POST /api/auth/logout`: end the session if there is one and clear the
/// cookie.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Result<impl IntoResponse, ApiError> {
    if let Some(token) = request_token(&headers) {
        session::close(&state.pool, &token).await?;
    }
    let jar = CookieJar::new().add(cleared_cookie(state.cookie_secure));
    Ok((jar, StatusCode::NO_CONTENT))
}

/// `GET /api/auth/profile`: the signed-in user.
pub async fn profile(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

/// `PUT /api/auth/profile`: edit name, bio or avatar.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<ProfileUpdate>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(user::update_profile(&state.pool, auth.user.id, body).await?))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
