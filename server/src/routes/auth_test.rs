use super::*;

use axum::http::HeaderValue;
use axum::http::header::COOKIE;

use crate::state::test_helpers::test_app_state;

fn headers(pairs: &[(axum::http::HeaderName, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.append(name.clone(), HeaderValue::from_str(value).unwrap());
    }
    map
}

// =============================================================================
// request_token
// =============================================================================

#[test]
fn token_from_cookie() {
    let map = headers(&[(COOKIE, "theme=dark; session_token=abc123")]);
    assert_eq!(request_token(&map).as_deref(), Some("abc123"));
}

#[test]
fn token_from_bearer_header() {
    let map = headers(&[(AUTHORIZATION, "Bearer def456")]);
    assert_eq!(request_token(&map).as_deref(), Some("def456"));
}

#[test]
fn cookie_wins_over_bearer() {
    let map = headers(&[(COOKIE, "session_token=from-cookie"), (AUTHORIZATION, "Bearer from-header")]);
    assert_eq!(request_token(&map).as_deref(), Some("from-cookie"));
}

#[test]
fn empty_cookie_falls_back_to_bearer() {
    let map = headers(&[(COOKIE, "session_token="), (AUTHORIZATION, "Bearer xyz")]);
    assert_eq!(request_token(&map).as_deref(), Some("xyz"));
}

#[test]
fn non_bearer_authorization_is_ignored() {
    assert_eq!(request_token(&headers(&[(AUTHORIZATION, "Basic dXNlcjpwYXNz")])), None);
    assert_eq!(request_token(&headers(&[(AUTHORIZATION, "Bearer   ")])), None);
    assert_eq!(request_token(&HeaderMap::new()), None);
}

// =============================================================================
// Cookies
// =============================================================================

#[test]
fn session_cookie_is_http_only_and_long_lived() {
    let cookie = session_cookie("tok".to_owned(), true);
    assert_eq!(cookie.name(), "session_token");
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.max_age(), Some(Duration::days(30)));
}

#[test]
fn cleared_cookie_expires_immediately() {
    let cookie = cleared_cookie(false);
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

// =============================================================================
// Extractors without a session
// =============================================================================

fn parts_without_auth() -> Parts {
    let (parts, ()) = axum::http::Request::builder().uri("/api/auth/profile").body(()).unwrap().into_parts();
    parts
}

#[tokio::test]
async fn auth_user_rejects_missing_token() {
    let state = test_app_state();
    let mut parts = parts_without_auth();
    let Err(err) = AuthUser::from_request_parts(&mut parts, &state).await else {
        panic!("expected rejection");
    };
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn maybe_user_is_none_without_token() {
    let state = test_app_state();
    let mut parts = parts_without_auth();
    let Ok(MaybeUser(user)) = MaybeUser::from_request_parts(&mut parts, &state).await else {
        panic!("anonymous request should not be rejected");
    };
    assert!(user.is_none());
}

#[tokio::test]
async fn admin_user_rejects_missing_token_as_unauthorized() {
    let state = test_app_state();
    let mut parts = parts_without_auth();
    let Err(err) = AdminUser::from_request_parts(&mut parts, &state).await else {
        panic!("expected rejection");
    };
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
}
