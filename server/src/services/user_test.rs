use super::*;

fn user(role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        email: "alice@example.com".to_owned(),
        name: "Alice Johnson".to_owned(),
        role,
        avatar: None,
        bio: None,
        created_at: time::macros::datetime!(2024-01-15 0:00 UTC),
    }
}

// =============================================================================
// Role
// =============================================================================

#[test]
fn role_parse_round_trips_names() {
    for role in [Role::Admin, Role::Student, Role::Instructor] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("Admin"), None);
}

#[test]
fn user_serializes_camel_case_with_rfc3339_date() {
    let json = serde_json::to_value(user(Role::Student)).unwrap();
    assert_eq!(json["role"], "student");
    assert_eq!(json["createdAt"], "2024-01-15T00:00:00Z");
    assert!(json.get("password_hash").is_none());
}

// =============================================================================
// Permissions
// =============================================================================

#[test]
fn admins_manage_anything() {
    assert!(user(Role::Admin).can_manage(Uuid::new_v4()));
}

#[test]
fn owners_manage_their_own_records() {
    let alice = user(Role::Student);
    assert!(alice.can_manage(alice.id));
    assert!(!alice.can_manage(Uuid::new_v4()));
}

#[test]
fn only_admins_and_instructors_author() {
    assert!(user(Role::Admin).can_author());
    assert!(user(Role::Instructor).can_author());
    assert!(!user(Role::Student).can_author());
}

// =============================================================================
// Profile validation
// =============================================================================

#[test]
fn profile_rejects_short_name_and_long_bio() {
    let update = ProfileUpdate { name: " A ".to_owned(), bio: Some("x".repeat(501)), avatar: None };
    let errors = validate_profile(&update).unwrap_err();
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, ["name", "bio"]);
}

#[test]
fn profile_accepts_absent_optionals() {
    let update = ProfileUpdate { name: "Alice Johnson".to_owned(), bio: None, avatar: None };
    assert!(validate_profile(&update).is_ok());
}

#[test]
fn profile_bio_limit_counts_chars() {
    let update = ProfileUpdate { name: "Alice".to_owned(), bio: Some("é".repeat(500)), avatar: None };
    assert!(validate_profile(&update).is_ok());
}

#[test]
fn blank_to_none_clears_whitespace() {
    assert_eq!(blank_to_none(Some("  ".to_owned())), None);
    assert_eq!(blank_to_none(Some(" hi ".to_owned())).as_deref(), Some("hi"));
}
