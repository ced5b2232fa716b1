use super::*;

use crudview::FormState;

use crate::net::types::test_helpers::make_user;

fn data(pairs: &[(&str, &str)]) -> FormData {
    pairs.iter().map(|(k, v)| (*k, *v)).collect()
}

// =============================================================
// Schemas
// =============================================================

#[test]
fn every_schema_is_well_formed() {
    for schema in [login_form(), register_form(), profile_form(), course_form(), post_form()] {
        assert!(schema.issues().is_empty(), "{}: {:?}", schema.title, schema.issues());
    }
}

#[test]
fn course_form_rejects_short_title_with_custom_message() {
    let schema = course_form();
    let mut form = FormState::new(&schema.fields, None);
    form.set_value("title", "Hi");
    assert!(form.submit(&schema.fields).is_err());
    assert_eq!(form.error("title"), Some("Title must be between 5 and 200 characters"));
}

#[test]
fn course_form_rejects_negative_price() {
    let schema = course_form();
    let mut form = FormState::new(&schema.fields, None);
    form.set_value("price", "-5");
    let _ = form.submit(&schema.fields);
    assert_eq!(form.error("price"), Some("Price must be a positive number"));
}

#[test]
fn register_form_rejects_bad_email() {
    let schema = register_form();
    let mut form = FormState::new(&schema.fields, None);
    form.set_value("email", "not-an-email");
    let _ = form.submit(&schema.fields);
    assert_eq!(form.error("email"), Some("Email format is invalid"));
}

#[test]
fn register_form_requires_six_char_password() {
    let schema = register_form();
    let mut form = FormState::new(&schema.fields, None);
    form.set_value("password", "12345");
    let _ = form.submit(&schema.fields);
    assert_eq!(form.error("password"), Some("Password must be at least 6 characters"));
}

// =============================================================
// Drafts
// =============================================================

#[test]
fn course_draft_parses_and_defaults() {
    let values = data(&[
        ("title", "  Rust for Web  "),
        ("description", "d"),
        ("category", "Programming"),
        ("level", "advanced"),
        ("price", "49.5"),
        ("duration", "6 weeks"),
        ("thumbnail", ""),
    ]);
    let draft = course_draft(&values, "Jane Smith");
    assert_eq!(draft.title, "Rust for Web");
    assert_eq!(draft.level, Level::Advanced);
    assert!((draft.price - 49.5).abs() < f64::EPSILON);
    assert_eq!(draft.instructor, "Jane Smith");
    assert!(draft.thumbnail.starts_with("/placeholder.svg"));
}

#[test]
fn post_draft_splits_tags_and_reads_checkbox() {
    let mut values = data(&[("title", "T"), ("tags", "react, , hooks ,js"), ("category", "Technology")]);
    values.insert("isPublished", true);
    let draft = post_draft(&values);
    assert_eq!(draft.tags, ["react", "hooks", "js"]);
    assert!(draft.is_published);
}

#[test]
fn register_request_normalizes_email_and_role() {
    let values = data(&[("name", "Bob"), ("email", " Bob@Example.com "), ("password", "secret1"), ("role", "instructor")]);
    let request = register_request(&values);
    assert_eq!(request.email, "bob@example.com");
    assert_eq!(request.role, Role::Instructor);
}

#[test]
fn profile_values_round_trip_into_update() {
    let mut user = make_user("u1", "John Doe", Role::Admin);
    user.bio = Some("Platform admin".to_owned());
    let update = profile_update(&profile_values(&user));
    assert_eq!(update.name, "John Doe");
    assert_eq!(update.bio.as_deref(), Some("Platform admin"));
    assert_eq!(update.avatar, None);
}

// =============================================================
// Edit values
// =============================================================

#[test]
fn course_values_pass_validation() {
    use crate::net::types::test_helpers::make_course;
    let mut course = make_course("c1", "Complete React Developer Course", "Web Development", Level::Intermediate, 99.99);
    course.description = "Learn React from scratch and build real world applications with hooks and context.".to_owned();
    course.duration = "40 hours".to_owned();
    let schema = course_form();
    let mut form = FormState::new(&schema.fields, Some(&course_values(&course)));
    let data = form.submit(&schema.fields).expect("valid course");
    assert_eq!(course_draft(&data, "Jane Smith").level, Level::Intermediate);
}

#[test]
fn post_values_join_tags_and_keep_flag() {
    use crate::net::types::test_helpers::make_post;
    let mut post = make_post("p1", "Getting Started", "Technology", 0, 0);
    post.tags = vec!["react".to_owned(), "hooks".to_owned()];
    let values = post_values(&post);
    assert_eq!(values.text("tags"), "react, hooks");
    assert!(values.flag("isPublished"));
    assert_eq!(post_draft(&values).tags, post.tags);
}

#[test]
fn parse_progress_clamps_and_sets_status() {
    assert_eq!(parse_progress("50"), Some((50, EnrollmentStatus::InProgress)));
    assert_eq!(parse_progress(" 140 "), Some((100, EnrollmentStatus::Completed)));
    assert_eq!(parse_progress("-3"), Some((0, EnrollmentStatus::InProgress)));
    assert_eq!(parse_progress("abc"), None);
    assert_eq!(parse_progress("NaN"), None);
}
