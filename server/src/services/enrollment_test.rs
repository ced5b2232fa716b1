use super::*;

use time::macros::datetime;

use crate::services::user::Role;

const NOW: OffsetDateTime = datetime!(2024-03-01 12:00 UTC);
const EARLIER: OffsetDateTime = datetime!(2024-02-15 9:30 UTC);

fn user(role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        email: "alice@example.com".to_owned(),
        name: "Alice Johnson".to_owned(),
        role,
        avatar: None,
        bio: None,
        created_at: EARLIER,
    }
}

fn state(progress: i32, status: EnrollmentStatus) -> ProgressState {
    ProgressState {
        progress,
        status,
        completed_lessons: vec!["l1".to_owned()],
        completed_at: (status == EnrollmentStatus::Completed).then_some(EARLIER),
    }
}

fn progress(value: i32) -> EnrollmentUpdate {
    EnrollmentUpdate { progress: Some(value), ..EnrollmentUpdate::default() }
}

// =============================================================================
// scoped_filter
// =============================================================================

#[test]
fn anonymous_sees_nothing() {
    assert_eq!(scoped_filter(None, EnrollmentFilter::default()), None);
}

#[test]
fn student_is_pinned_to_own_enrollments() {
    let student = user(Role::Student);
    let requested = EnrollmentFilter { user_id: Some(Uuid::new_v4()), course_id: None };
    let scoped = scoped_filter(Some(&student), requested).unwrap();
    assert_eq!(scoped.user_id, Some(student.id));
}

#[test]
fn student_keeps_course_filter() {
    let student = user(Role::Student);
    let course_id = Uuid::new_v4();
    let scoped = scoped_filter(Some(&student), EnrollmentFilter { user_id: None, course_id: Some(course_id) }).unwrap();
    assert_eq!(scoped.course_id, Some(course_id));
}

#[test]
fn admin_filter_passes_through() {
    let admin = user(Role::Admin);
    let requested = EnrollmentFilter { user_id: Some(Uuid::new_v4()), course_id: Some(Uuid::new_v4()) };
    assert_eq!(scoped_filter(Some(&admin), requested), Some(requested));
}

// =============================================================================
// next_state
// =============================================================================

#[test]
fn partial_progress_stays_in_progress() {
    let next = next_state(&state(10, EnrollmentStatus::InProgress), progress(75), NOW).unwrap();
    assert_eq!(next.progress, 75);
    assert_eq!(next.status, EnrollmentStatus::InProgress);
    assert_eq!(next.completed_at, None);
    assert_eq!(next.completed_lessons, ["l1"]);
}

#[test]
fn reaching_100_completes_and_stamps() {
    let next = next_state(&state(75, EnrollmentStatus::InProgress), progress(100), NOW).unwrap();
    assert_eq!(next.status, EnrollmentStatus::Completed);
    assert_eq!(next.completed_at, Some(NOW));
}

#[test]
fn completed_keeps_original_stamp() {
    let next = next_state(&state(100, EnrollmentStatus::Completed), progress(100), NOW).unwrap();
    assert_eq!(next.completed_at, Some(EARLIER));
}

#[test]
fn lowering_progress_reopens_completed() {
    let next = next_state(&state(100, EnrollmentStatus::Completed), progress(40), NOW).unwrap();
    assert_eq!(next.status, EnrollmentStatus::InProgress);
    assert_eq!(next.completed_at, None);
}

#[test]
fn explicit_completed_pins_progress() {
    let update = EnrollmentUpdate { status: Some(EnrollmentStatus::Completed), ..EnrollmentUpdate::default() };
    let next = next_state(&state(30, EnrollmentStatus::InProgress), update, NOW).unwrap();
    assert_eq!(next.progress, 100);
    assert_eq!(next.completed_at, Some(NOW));
}

#[test]
fn explicit_pause_keeps_progress() {
    let update = EnrollmentUpdate { status: Some(EnrollmentStatus::Paused), ..EnrollmentUpdate::default() };
    let next = next_state(&state(30, EnrollmentStatus::InProgress), update, NOW).unwrap();
    assert_eq!(next.progress, 30);
    assert_eq!(next.status, EnrollmentStatus::Paused);
}

#[test]
fn in_progress_status_at_full_progress_is_rejected() {
    let update = EnrollmentUpdate {
        progress: Some(100),
        status: Some(EnrollmentStatus::InProgress),
        ..EnrollmentUpdate::default()
    };
    let errors = next_state(&state(40, EnrollmentStatus::InProgress), update, NOW).unwrap_err();
    assert_eq!(errors[0].field, "status");
}

#[test]
fn pausing_a_completed_enrollment_is_rejected() {
    let update = EnrollmentUpdate { status: Some(EnrollmentStatus::Paused), ..EnrollmentUpdate::default() };
    let errors = next_state(&state(100, EnrollmentStatus::Completed), update, NOW).unwrap_err();
    assert_eq!(errors[0].field, "status");
}

#[test]
fn completed_status_with_partial_progress_is_rejected() {
    let update = EnrollmentUpdate {
        progress: Some(60),
        status: Some(EnrollmentStatus::Completed),
        ..EnrollmentUpdate::default()
    };
    let errors = next_state(&state(40, EnrollmentStatus::InProgress), update, NOW).unwrap_err();
    assert_eq!(errors[0].field, "status");
}

#[test]
fn pausing_with_lowered_progress_reopens_completed() {
    let update = EnrollmentUpdate {
        progress: Some(80),
        status: Some(EnrollmentStatus::Paused),
        ..EnrollmentUpdate::default()
    };
    let next = next_state(&state(100, EnrollmentStatus::Completed), update, NOW).unwrap();
    assert_eq!((next.progress, next.status, next.completed_at), (80, EnrollmentStatus::Paused, None));
}

#[test]
fn out_of_range_progress_is_rejected() {
    for bad in [-1, 101] {
        let errors = next_state(&state(0, EnrollmentStatus::InProgress), progress(bad), NOW).unwrap_err();
        assert_eq!(errors[0].field, "progress");
    }
}

#[test]
fn status_parses_kebab_case() {
    assert_eq!(EnrollmentStatus::parse("in-progress"), Some(EnrollmentStatus::InProgress));
    assert_eq!(EnrollmentStatus::parse("in_progress"), None);
}

// =============================================================================
// Live database
// =============================================================================

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn enroll_counts_rejects_duplicate_and_releases_seat() {
    use crate::services::course::{CourseInput, Level, create_course};
    use crate::state::test_helpers::{insert_user, integration_pool};

    let pool = integration_pool().await;
    let instructor = insert_user(&pool, "jane@example.com", Role::Instructor).await;
    let student = insert_user(&pool, "alice@example.com", Role::Student).await;
    let course = create_course(
        &pool,
        &instructor,
        CourseInput {
            title: "Advanced TypeScript".to_owned(),
            description: "Master TypeScript.".to_owned(),
            instructor: None,
            price: 129.99,
            duration: "8 weeks".to_owned(),
            level: Level::Advanced,
            thumbnail: None,
            category: "Programming".to_owned(),
            lessons: Vec::new(),
        },
    )
    .await
    .expect("create course");
    assert_eq!(course.instructor, "jane");

    let (enrollment, updated) = enroll(&pool, &student, course.id).await.expect("first enroll");
    assert_eq!(updated.enrolled_students, 1);
    assert_eq!(enrollment.status, EnrollmentStatus::InProgress);

    let again = enroll(&pool, &student, course.id).await;
    assert!(matches!(again, Err(EnrollError::AlreadyEnrolled)));
    let missing = enroll(&pool, &student, Uuid::new_v4()).await;
    assert!(matches!(missing, Err(EnrollError::CourseNotFound(_))));

    let own = list_enrollments(&pool, scoped_filter(Some(&student), EnrollmentFilter::default()).unwrap())
        .await
        .expect("list");
    assert_eq!(own.len(), 1);

    let done = update_enrollment(&pool, &student, enrollment.id, progress(100)).await.expect("update");
    assert_eq!(done.status, EnrollmentStatus::Completed);
    assert!(done.completed_at.is_some());

    let forbidden = delete_enrollment(&pool, &instructor, enrollment.id).await;
    assert!(matches!(forbidden, Err(EnrollError::Forbidden)));
    delete_enrollment(&pool, &student, enrollment.id).await.expect("delete");
    let course = crate::services::course::get_course(&pool, course.id).await.expect("course");
    assert_eq!(course.enrolled_students, 0);
}
