use super::*;

use time::macros::datetime;

// =============================================================
// Helpers
// =============================================================

fn make_post() -> BlogPost {
    BlogPost {
        id: "p1".to_owned(),
        title: "Getting Started with React Hooks".to_owned(),
        content: "Hooks let you use state".to_owned(),
        excerpt: "Learn hooks".to_owned(),
        author: "Jane Smith".to_owned(),
        author_id: "u2".to_owned(),
        thumbnail: "/react.jpg".to_owned(),
        category: "React".to_owned(),
        tags: vec!["react".to_owned(), "hooks".to_owned()],
        published_at: datetime!(2024-01-15 10:00 UTC),
        updated_at: datetime!(2024-01-15 10:00 UTC),
        is_published: true,
        views: 1250,
        likes: 89,
    }
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn user_deserializes_camel_case_json() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "john@example.com",
        "name": "John Doe",
        "role": "admin",
        "createdAt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(user.role, Role::Admin);
    assert!(user.avatar.is_none());
    assert_eq!(user.created_at, datetime!(2024-01-01 0:00 UTC));
}

#[test]
fn enrollment_status_uses_kebab_case() {
    let json = serde_json::to_string(&EnrollmentStatus::InProgress).unwrap();
    assert_eq!(json, "\"in-progress\"");
}

#[test]
fn enrollment_without_completed_at_deserializes() {
    let enrollment: Enrollment = serde_json::from_value(serde_json::json!({
        "id": "e1",
        "userId": "u3",
        "courseId": "c1",
        "progress": 25,
        "completedLessons": ["l1"],
        "enrolledAt": "2024-01-10T00:00:00Z",
        "status": "in-progress"
    }))
    .unwrap();
    assert!(enrollment.completed_at.is_none());
    assert_eq!(enrollment.status, EnrollmentStatus::InProgress);
}

#[test]
fn post_serializes_with_camel_case_keys() {
    let json = serde_json::to_value(make_post()).unwrap();
    assert_eq!(json["isPublished"], true);
    assert_eq!(json["authorId"], "u2");
    assert_eq!(json["publishedAt"], "2024-01-15T10:00:00Z");
}

#[test]
fn api_error_body_defaults_details() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"error":"Course not found"}"#).unwrap();
    assert_eq!(body.error, "Course not found");
    assert!(body.details.is_empty());
}

#[test]
fn role_and_level_parse_round_trip() {
    assert_eq!(Role::parse("instructor"), Some(Role::Instructor));
    assert_eq!(Role::parse("owner"), None);
    assert_eq!(Level::parse(Level::Advanced.as_str()), Some(Level::Advanced));
}

// =============================================================
// Row access
// =============================================================

#[test]
fn post_row_exposes_json_keys() {
    let post = make_post();
    assert_eq!(post.field("views"), CellValue::Number(1250.0));
    assert_eq!(post.field("isPublished"), CellValue::Bool(true));
    assert!(post.field("unknown").is_null());
}

#[test]
fn post_row_search_covers_tags_and_author() {
    let post = make_post();
    assert!(post.matches("hooks"));
    assert!(post.matches("jane"));
    assert!(!post.matches("python"));
}
