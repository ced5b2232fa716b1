use super::*;

use time::macros::datetime;

use crate::net::types::{EnrollmentStatus, Level, Role};

// =============================================================
// Helpers
// =============================================================

fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        name: name.to_owned(),
        role: Role::Student,
        avatar: None,
        bio: None,
        created_at: datetime!(2024-01-01 0:00 UTC),
    }
}

fn course(id: &str, enrolled: u32) -> Course {
    Course {
        id: id.to_owned(),
        title: format!("Course {id}"),
        description: String::new(),
        instructor: "Jane Smith".to_owned(),
        instructor_id: "u2".to_owned(),
        price: 99.99,
        duration: "40 hours".to_owned(),
        level: Level::Beginner,
        thumbnail: String::new(),
        category: "Web Development".to_owned(),
        lessons: Vec::new(),
        enrolled_students: enrolled,
        rating: 4.8,
        created_at: datetime!(2024-01-01 0:00 UTC),
        updated_at: datetime!(2024-01-01 0:00 UTC),
    }
}

fn enrollment(id: &str, user_id: &str, course_id: &str) -> Enrollment {
    Enrollment {
        id: id.to_owned(),
        user_id: user_id.to_owned(),
        course_id: course_id.to_owned(),
        progress: 0,
        completed_lessons: Vec::new(),
        enrolled_at: datetime!(2024-02-01 0:00 UTC),
        completed_at: None,
        status: EnrollmentStatus::InProgress,
    }
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn default_state_is_empty() {
    let state = AppState::default();
    assert!(state.user.is_none());
    assert!(state.users.is_empty());
    assert!(state.courses.is_empty());
    assert!(state.enrollments.is_empty());
    assert!(state.blog_posts.is_empty());
    assert!(state.comments.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// Collection transitions
// =============================================================

#[test]
fn add_then_delete_restores_collection() {
    let before = reduce(&AppState::default(), Action::SetUsers(vec![user("u1", "John"), user("u2", "Jane")]));
    let added = reduce(&before, Action::AddUser(user("u9", "New")));
    assert_eq!(added.users.len(), 3);
    let after = reduce(&added, Action::DeleteUser("u9".to_owned()));
    assert_eq!(after.users, before.users);
}

#[test]
fn update_replaces_whole_record() {
    let state = reduce(&AppState::default(), Action::SetCourses(vec![course("c1", 5), course("c2", 1)]));
    let mut replacement = course("c1", 6);
    replacement.title = "Renamed".to_owned();
    let next = reduce(&state, Action::UpdateCourse(replacement.clone()));
    assert_eq!(next.courses[0], replacement);
    assert_eq!(next.courses[1], state.courses[1]);
}

#[test]
fn update_unknown_id_changes_nothing() {
    let state = reduce(&AppState::default(), Action::SetCourses(vec![course("c1", 5)]));
    let next = reduce(&state, Action::UpdateCourse(course("zz", 0)));
    assert_eq!(next, state);
}

#[test]
fn update_user_refreshes_signed_in_user() {
    let mut state = reduce(&AppState::default(), Action::SetUsers(vec![user("u1", "John")]));
    state = reduce(&state, Action::SetUser(Some(user("u1", "John"))));
    let next = reduce(&state, Action::UpdateUser(user("u1", "Johnny")));
    assert_eq!(next.user.as_ref().map(|u| u.name.as_str()), Some("Johnny"));
    assert_eq!(next.users[0].name, "Johnny");
}

#[test]
fn update_other_user_keeps_signed_in_user() {
    let mut state = reduce(&AppState::default(), Action::SetUsers(vec![user("u1", "John"), user("u2", "Jane")]));
    state = reduce(&state, Action::SetUser(Some(user("u1", "John"))));
    let next = reduce(&state, Action::UpdateUser(user("u2", "Janet")));
    assert_eq!(next.user, state.user);
}

#[test]
fn reducer_does_not_touch_other_collections() {
    let state = reduce(&AppState::default(), Action::SetCourses(vec![course("c1", 0)]));
    let next = reduce(&state, Action::AddEnrollment(enrollment("e1", "u3", "c1")));
    assert_eq!(next.courses, state.courses);
    assert_eq!(next.enrollments.len(), 1);
}

// =============================================================
// Enrollment consistency gap
// =============================================================

// Current behavior: the course counter only moves on a separate UpdateCourse.
#[test]
fn add_enrollment_alone_leaves_enrolled_count_unchanged() {
    let state = reduce(&AppState::default(), Action::SetCourses(vec![course("c1", 1234)]));
    let next = reduce(&state, Action::AddEnrollment(enrollment("e9", "u4", "c1")));
    assert_eq!(next.courses[0].enrolled_students, 1234);
}

#[test]
fn explicit_second_dispatch_updates_count() {
    let mut state = reduce(&AppState::default(), Action::SetCourses(vec![course("c1", 1234)]));
    state = reduce(&state, Action::AddEnrollment(enrollment("e9", "u4", "c1")));
    state = reduce(&state, Action::UpdateCourse(course("c1", 1235)));
    assert_eq!(state.courses[0].enrolled_students, 1235);
}

#[test]
fn removal_then_refetched_course_releases_seat() {
    let mut state = reduce(&AppState::default(), Action::SetCourses(vec![course("c1", 1235)]));
    state = reduce(&state, Action::SetEnrollments(vec![enrollment("e9", "u4", "c1")]));
    state = reduce(&state, Action::DeleteEnrollment("e9".to_owned()));
    assert_eq!(state.courses[0].enrolled_students, 1235);
    state = reduce(&state, Action::UpdateCourse(course("c1", 1234)));
    assert!(state.enrollments.is_empty());
    assert_eq!(state.courses[0].enrolled_students, 1234);
}

// =============================================================
// Flags
// =============================================================

#[test]
fn set_error_overwrites_previous() {
    let state = reduce(&AppState::default(), Action::SetError(Some("first".to_owned())));
    let next = reduce(&state, Action::SetError(Some("second".to_owned())));
    assert_eq!(next.error.as_deref(), Some("second"));
    let cleared = reduce(&next, Action::SetError(None));
    assert!(cleared.error.is_none());
}

#[test]
fn set_loading_toggles_flag() {
    let state = reduce(&AppState::default(), Action::SetLoading(true));
    assert!(state.loading);
    assert!(!reduce(&state, Action::SetLoading(false)).loading);
}
