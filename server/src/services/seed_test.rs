use super::*;

#[test]
fn bundled_fixture_parses_and_links() {
    let data = SeedData::bundled().unwrap();
    assert_eq!(data.users.len(), 4);
    assert_eq!(data.courses.len(), 2);
    assert_eq!(data.enrollments.len(), 3);
    assert_eq!(data.posts.len(), 2);
    assert_eq!(data.comments.len(), 2);
}

#[test]
fn bundled_fixture_has_one_admin() {
    let data = SeedData::bundled().unwrap();
    let admins: Vec<_> = data.users.iter().filter(|u| u.role == "admin").map(|u| u.email.as_str()).collect();
    assert_eq!(admins, ["john@example.com"]);
}

#[test]
fn completed_enrollment_has_completion_date() {
    let data = SeedData::bundled().unwrap();
    for e in &data.enrollments {
        assert_eq!(e.status == "completed", e.completed_at.is_some(), "{}/{}", e.user, e.course);
    }
}

#[test]
fn dangling_key_is_rejected() {
    let raw = r#"{
        "users": [],
        "courses": [],
        "enrollments": [],
        "posts": [],
        "comments": [
            {"post": "missing", "user": "ghost", "content": "hi", "createdAt": "2024-03-02T00:00:00Z"}
        ]
    }"#;
    let err = SeedData::parse(raw).unwrap_err();
    assert!(matches!(err, SeedError::UnknownKey { kind: "comment user", .. }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(SeedData::parse("{"), Err(SeedError::Parse(_))));
}
