use super::*;

use uuid::Uuid;

async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Body shape
// =============================================================================

#[tokio::test]
async fn plain_error_has_no_details() {
    let (status, body) = body_json(ApiError::new(StatusCode::NOT_FOUND, "Course not found")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({ "error": "Course not found" }));
}

#[tokio::test]
async fn validation_error_lists_details() {
    let details = vec![FieldError { field: "email".to_owned(), message: "Invalid email address".to_owned() }];
    let (status, body) = body_json(ApiError::validation(details)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0]["field"], "email");
    assert_eq!(body["details"][0]["message"], "Invalid email address");
}

// =============================================================================
// Service error mapping
// =============================================================================

#[test]
fn auth_errors_map_to_expected_statuses() {
    let err = ApiError::from(AuthError::InvalidCredentials);
    assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    assert_eq!(err.message, "Invalid email or password");

    let err = ApiError::from(AuthError::EmailTaken);
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, "User with this email already exists");
}

#[test]
fn enroll_errors_map_to_expected_statuses() {
    assert_eq!(ApiError::from(EnrollError::CourseNotFound(Uuid::nil())).status, StatusCode::NOT_FOUND);
    let err = ApiError::from(EnrollError::AlreadyEnrolled);
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, "Already enrolled in this course");
}

#[test]
fn not_found_messages_name_the_resource() {
    assert_eq!(ApiError::from(CourseError::NotFound(Uuid::nil())).message, "Course not found");
    assert_eq!(ApiError::from(BlogError::NotFound(Uuid::nil())).message, "Blog post not found");
    assert_eq!(ApiError::from(CommentError::NotFound(Uuid::nil())).message, "Comment not found");
}

#[test]
fn forbidden_maps_to_403() {
    assert_eq!(ApiError::from(CourseError::Forbidden).status, StatusCode::FORBIDDEN);
    assert_eq!(ApiError::from(CommentError::Forbidden).status, StatusCode::FORBIDDEN);
}

#[test]
fn database_errors_hide_details() {
    let err = ApiError::from(sqlx::Error::PoolTimedOut);
    assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message, "Internal server error");
}
