//! JSON error responses.
//!
//! Every failing endpoint answers `{ "error": message }`, plus
//! `details: [{field, message}]` for validation failures. Database errors
//! are logged here and reported as a bare 500.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::services::auth::AuthError;
use crate::services::blog::BlogError;
use crate::services::comment::CommentError;
use crate::services::course::CourseError;
use crate::services::enrollment::EnrollError;
use crate::services::user::UserError;
use crate::services::validate::FieldError;

const INTERNAL: &str = "Internal server error";

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Vec<FieldError>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "no_details")]
    details: &'a [FieldError],
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn no_details(details: &&[FieldError]) -> bool {
    details.is_empty()
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), details: Vec::new() }
    }

    #[must_use]
    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Authentication required")
    }

    #[must_use]
    pub fn forbidden() -> Self {
        Self::new(StatusCode::FORBIDDEN, "Forbidden")
    }

    #[must_use]
    pub fn validation(details: Vec<FieldError>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: "Validation failed".to_owned(), details }
    }

    fn internal(err: &dyn std::error::Error) -> Self {
        tracing::error!(error = %err, "request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: &self.message, details: &self.details };
        (self.status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::internal(&err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(details) => Self::validation(details),
            AuthError::EmailTaken => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            AuthError::InvalidCredentials => Self::new(StatusCode::UNAUTHORIZED, err.to_string()),
            AuthError::Hash(_) | AuthError::Database(_) => Self::internal(&err),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "User not found"),
            UserError::Validation(details) => Self::validation(details),
            UserError::SelfDelete => Self::new(StatusCode::BAD_REQUEST, "You cannot delete your own account"),
            UserError::Database(e) => Self::internal(&e),
        }
    }
}

impl From<CourseError> for ApiError {
    fn from(err: CourseError) -> Self {
        match err {
            CourseError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Course not found"),
            CourseError::Forbidden => Self::forbidden(),
            CourseError::Validation(details) => Self::validation(details),
            CourseError::Database(e) => Self::internal(&e),
        }
    }
}

impl From<EnrollError> for ApiError {
    fn from(err: EnrollError) -> Self {
        match err {
            EnrollError::CourseNotFound(_) => Self::new(StatusCode::NOT_FOUND, "Course not found"),
            EnrollError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Enrollment not found"),
            EnrollError::AlreadyEnrolled => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            EnrollError::Forbidden => Self::forbidden(),
            EnrollError::Validation(details) => Self::validation(details),
            EnrollError::Database(e) => Self::internal(&e),
        }
    }
}

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Blog post not found"),
            BlogError::Forbidden => Self::forbidden(),
            BlogError::Validation(details) => Self::validation(details),
            BlogError::Database(e) => Self::internal(&e),
        }
    }
}

impl From<CommentError> for ApiError {
    fn from(err: CommentError) -> Self {
        match err {
            CommentError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Comment not found"),
            CommentError::ParentNotFound(_) => Self::new(StatusCode::BAD_REQUEST, "Parent comment not found"),
            CommentError::Forbidden => Self::forbidden(),
            CommentError::Validation(details) => Self::validation(details),
            CommentError::Database(e) => Self::internal(&e),
        }
    }
}
