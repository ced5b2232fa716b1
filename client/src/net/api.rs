//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>`. The error string is the server's
//! `{"error": ...}` message when one is present, otherwise a status line, so
//! pages can show it to the user as-is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    BlogPost, Comment, CommentDraft, Course, CourseDraft, EnrollResponse, Enrollment, EnrollmentStatus, PostDraft,
    ProfileUpdate, RegisterRequest, Role, User,
};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;
#[cfg(feature = "hydrate")]
use super::types::{AuthResponse, LoginRequest};

#[cfg(not(feature = "hydrate"))]
const SERVER_ONLY: &str = "not available on server";

// =============================================================================
// ENDPOINTS
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn course_endpoint(id: &str) -> String {
    format!("/api/courses/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn enroll_endpoint(course_id: &str) -> String {
    format!("/api/courses/{course_id}/enroll")
}

#[cfg(any(test, feature = "hydrate"))]
fn enrollment_endpoint(id: &str) -> String {
    format!("/api/enrollments/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn post_endpoint(id: &str) -> String {
    format!("/api/blog/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn post_comments_endpoint(post_id: &str) -> String {
    format!("/api/blog/{post_id}/comments")
}

#[cfg(any(test, feature = "hydrate"))]
fn comment_endpoint(post_id: &str, comment_id: &str) -> String {
    format!("/api/blog/{post_id}/comments/{comment_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(id: &str) -> String {
    format!("/api/users/{id}")
}

/// Prefer the server's error message, fall back to the status code.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, body: Option<ApiErrorBody>) -> String {
    match body {
        Some(body) if !body.error.is_empty() => match body.details.first() {
            Some(detail) => format!("{}: {}", body.error, detail.message),
            None => body.error,
        },
        _ => format!("request failed: {status}"),
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.json::<ApiErrorBody>().await.ok();
        let message = failure_message(status, body);
        log::warn!("api error: {message}");
        return Err(message);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url).send().await.map_err(|e| e.to_string())?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn put_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let resp = gloo_net::http::Request::put(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn delete(url: &str) -> Result<(), String> {
    let resp = gloo_net::http::Request::delete(url).send().await.map_err(|e| e.to_string())?;
    if resp.ok() {
        return Ok(());
    }
    let status = resp.status();
    Err(failure_message(status, resp.json::<ApiErrorBody>().await.ok()))
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the currently authenticated user from `/api/auth/profile`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<User>("/api/auth/profile").await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// `POST /api/auth/login`; the server sets the session cookie.
///
/// # Errors
///
/// Returns the server message (e.g. "Invalid email or password").
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp: AuthResponse = post_json("/api/auth/login", &body).await?;
        Ok(resp.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(SERVER_ONLY.to_owned())
    }
}

/// `POST /api/auth/register`; the server sets the session cookie.
///
/// # Errors
///
/// Returns the server message for duplicate emails or invalid input.
pub async fn register(request: &RegisterRequest) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp: AuthResponse = post_json("/api/auth/register", request).await?;
        Ok(resp.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(SERVER_ONLY.to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// `PUT /api/auth/profile`
///
/// # Errors
///
/// Returns an error string if the update is rejected.
pub async fn update_profile(update: &ProfileUpdate) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        put_json("/api/auth/profile", update).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err(SERVER_ONLY.to_owned())
    }
}

// =============================================================================
// USERS
// =============================================================================

/// `GET /api/users` (admin only).
///
/// # Errors
///
/// Returns an error string on network failure or a non-admin session.
pub async fn fetch_users() -> Result<Vec<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/users").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_ONLY.to_owned())
    }
}

/// `PUT /api/users/{id}` with a new role.
///
/// # Errors
///
/// Returns an error string if the update is rejected.
pub async fn update_user_role(id: &str, role: Role) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        put_json(&user_endpoint(id), &serde_json::json!({ "role": role })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, role);
        Err(SERVER_ONLY.to_owned())
    }
}

/// `DELETE /api/users/{id}`
///
/// # Errors
///
/// Returns an error string if the delete is rejected.
pub async fn delete_user(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(&user_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_ONLY.to_owned())
    }
}

// =============================================================================
// COURSES & ENROLLMENTS
// =============================================================================

/// `GET /api/courses`
///
/// # Errors
///
/// Returns an error string on network or decode failure.
pub async fn fetch_courses() -> Result<Vec<Course>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/courses").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_ONLY.to_owned())
    }
}

/// `GET /api/courses/{id}`
///
/// # Errors
///
/// Returns "Course not found" for unknown ids.
pub async fn fetch_course(id: &str) -> Result<Course, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&course_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_ONLY.to_owned())
    }
}

/// `POST /api/courses`
///
/// # Errors
///
/// Returns an error string if validation or authorization fails.
pub async fn create_course(draft: &CourseDraft) -> Result<Course, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/courses", draft).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(SERVER_ONLY.to_owned())
    }
}

/// `PUT /api/courses/{id}`
///
/// # Errors
///
/// Returns an error string if the course is missing or the update is rejected.
pub async fn update_course(id: &str, draft: &CourseDraft) -> Result<Course, String> {
    #[cfg(feature = "hydrate")]
    {
        put_json(&course_endpoint(id), draft).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft);
        Err(SERVER_ONLY.to_owned())
    }
}

/// `DELETE /api/courses/{id}`
///
/// # Errors
///
/// Returns an error string if the delete is rejected.
pub async fn delete_course(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(&course_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_ONLY.to_owned())
    }
}

/// `POST /api/courses/{id}/enroll`; returns the new enrollment and the
/// course with its refreshed student count.
///
/// # Errors
///
/// Returns "Already enrolled in this course" or "Course not found" from the server.
pub async fn enroll(course_id: &str) -> Result<EnrollResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&enroll_endpoint(course_id), &serde_json::json!({})).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course_id;
        Err(SERVER_ONLY.to_owned())
    }
}

/// `GET /api/enrollments`
///
/// # Errors
///
/// Returns an error string on network or decode failure.
pub async fn fetch_enrollments() -> Result<Vec<Enrollment>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/enrollments").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_ONLY.to_owned())
    }
}

/// `PUT /api/enrollments/{id}` with progress and status.
///
/// # Errors
///
/// Returns an error string if the update is rejected.
pub async fn update_enrollment(id: &str, progress: u32, status: EnrollmentStatus) -> Result<Enrollment, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "progress": progress, "status": status });
        put_json(&enrollment_endpoint(id), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, progress, status);
        Err(SERVER_ONLY.to_owned())
    }
}

/// `DELETE /api/enrollments/{id}`
///
/// # Errors
///
/// Returns an error string if the delete is rejected.
pub async fn delete_enrollment(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(&enrollment_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_ONLY.to_owned())
    }
}

// =============================================================================
// BLOG & COMMENTS
// =============================================================================

/// `GET /api/blog`
///
/// # Errors
///
/// Returns an error string on network or decode failure.
pub async fn fetch_posts() -> Result<Vec<BlogPost>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/blog").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_ONLY.to_owned())
    }
}

/// `GET /api/blog/{id}`. The server counts this as a view.
///
/// # Errors
///
/// Returns "Blog post not found" for unknown ids.
pub async fn fetch_post(id: &str) -> Result<BlogPost, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&post_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_ONLY.to_owned())
    }
}

/// `POST /api/blog`
///
/// # Errors
///
/// Returns an error string if validation or authorization fails.
pub async fn create_post(draft: &PostDraft) -> Result<BlogPost, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/blog", draft).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(SERVER_ONLY.to_owned())
    }
}

/// `PUT /api/blog/{id}`
///
/// # Errors
///
/// Returns an error string if the post is missing or the update is rejected.
pub async fn update_post(id: &str, draft: &PostDraft) -> Result<BlogPost, String> {
    #[cfg(feature = "hydrate")]
    {
        put_json(&post_endpoint(id), draft).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft);
        Err(SERVER_ONLY.to_owned())
    }
}

/// `DELETE /api/blog/{id}`
///
/// # Errors
///
/// Returns an error string if the delete is rejected.
pub async fn delete_post(id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(&post_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_ONLY.to_owned())
    }
}

/// `GET /api/comments`: every comment, for moderation and initial load.
///
/// # Errors
///
/// Returns an error string on network or decode failure.
pub async fn fetch_comments() -> Result<Vec<Comment>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/comments").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_ONLY.to_owned())
    }
}

/// `POST /api/blog/{post_id}/comments`
///
/// # Errors
///
/// Returns an error string when not logged in or the post is missing.
pub async fn add_comment(post_id: &str, draft: &CommentDraft) -> Result<Comment, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&post_comments_endpoint(post_id), draft).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, draft);
        Err(SERVER_ONLY.to_owned())
    }
}

/// `DELETE /api/blog/{post_id}/comments/{comment_id}`
///
/// # Errors
///
/// Returns an error string unless the caller owns the comment or is an admin.
pub async fn delete_comment(post_id: &str, comment_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        delete(&comment_endpoint(post_id, comment_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, comment_id);
        Err(SERVER_ONLY.to_owned())
    }
}
