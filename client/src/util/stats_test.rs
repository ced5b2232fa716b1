use super::*;

use time::macros::datetime;

use crate::net::types::Level;
use crate::net::types::test_helpers::{make_comment, make_course, make_enrollment, make_post};

fn state() -> AppState {
    AppState {
        courses: vec![
            make_course("c1", "React", "Web Development", Level::Intermediate, 99.99),
            make_course("c2", "Python", "Data Science", Level::Beginner, 79.99),
        ],
        enrollments: vec![
            make_enrollment("e1", "u3", "c1", 25),
            make_enrollment("e2", "u3", "c2", 100),
            make_enrollment("e3", "u4", "c1", 0),
            make_enrollment("e4", "u4", "missing", 0),
        ],
        comments: vec![make_comment("cm1", "p1", None), make_comment("cm2", "p1", Some("cm1"))],
        ..AppState::default()
    }
}

#[test]
fn learner_stats_counts_own_enrollments() {
    let stats = learner_stats(&state(), "u3");
    assert_eq!(stats.enrolled, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.average_progress, 63);
    assert_eq!(stats.completion_rate, 50);
    assert_eq!(stats.comments, 2);
}

#[test]
fn learner_stats_for_new_user_are_zero() {
    assert_eq!(learner_stats(&state(), "nobody"), LearnerStats::default());
}

#[test]
fn site_revenue_sums_known_course_prices() {
    let stats = site_stats(&state());
    assert_eq!(stats.enrollments, 4);
    assert!((stats.revenue - (99.99 * 2.0 + 79.99)).abs() < 1e-9);
}

#[test]
fn site_stats_count_only_published_posts() {
    let mut state = state();
    let mut draft = make_post("p2", "Draft", "React", 0, 0);
    draft.is_published = false;
    state.blog_posts = vec![make_post("p1", "Live", "React", 0, 0), draft];
    assert_eq!(site_stats(&state).published_posts, 1);
}

#[test]
fn recent_enrollments_newest_first_and_limited() {
    let mut items = state().enrollments;
    items[0].enrolled_at = datetime!(2024-03-01 0:00 UTC);
    items[2].enrolled_at = datetime!(2024-04-01 0:00 UTC);
    let recent = recent_enrollments(&items, 2);
    let ids: Vec<_> = recent.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["e3", "e1"]);
}

#[test]
fn find_enrollment_matches_user_and_course() {
    let state = state();
    assert_eq!(find_enrollment(&state.enrollments, "u4", "c1").map(|e| e.id.as_str()), Some("e3"));
    assert!(find_enrollment(&state.enrollments, "u3", "missing").is_none());
}
