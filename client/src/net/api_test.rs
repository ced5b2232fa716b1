use super::*;

use crate::net::types::FieldError;

#[test]
fn resource_endpoints_format_expected_paths() {
    assert_eq!(course_endpoint("c1"), "/api/courses/c1");
    assert_eq!(enroll_endpoint("c1"), "/api/courses/c1/enroll");
    assert_eq!(enrollment_endpoint("e1"), "/api/enrollments/e1");
    assert_eq!(post_endpoint("p1"), "/api/blog/p1");
    assert_eq!(user_endpoint("u1"), "/api/users/u1");
}

#[test]
fn comment_endpoints_nest_under_post() {
    assert_eq!(post_comments_endpoint("p1"), "/api/blog/p1/comments");
    assert_eq!(comment_endpoint("p1", "cm2"), "/api/blog/p1/comments/cm2");
}

#[test]
fn failure_message_prefers_server_error() {
    let body = ApiErrorBody { error: "Already enrolled in this course".to_owned(), details: Vec::new() };
    assert_eq!(failure_message(400, Some(body)), "Already enrolled in this course");
}

#[test]
fn failure_message_appends_first_detail() {
    let body = ApiErrorBody {
        error: "Validation failed".to_owned(),
        details: vec![FieldError { field: "email".to_owned(), message: "Invalid email address".to_owned() }],
    };
    assert_eq!(failure_message(400, Some(body)), "Validation failed: Invalid email address");
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message(502, None), "request failed: 502");
    assert_eq!(failure_message(500, Some(ApiErrorBody::default())), "request failed: 500");
}
