//! Derived figures for the student dashboard and admin overview.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use std::cmp::Reverse;

use crate::net::types::{BlogPost, Comment, Course, Enrollment, EnrollmentStatus};
use crate::state::store::AppState;

/// Per-student learning summary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LearnerStats {
    pub enrolled: usize,
    pub completed: usize,
    pub in_progress: usize,
    /// Rounded mean progress, 0 when not enrolled anywhere.
    pub average_progress: u32,
    /// Rounded percentage of enrollments completed.
    pub completion_rate: u32,
    pub comments: usize,
}

#[must_use]
pub fn learner_stats(state: &AppState, user_id: &str) -> LearnerStats {
    let mine: Vec<&Enrollment> = state.enrollments.iter().filter(|e| e.user_id == user_id).collect();
    let enrolled = mine.len();
    let completed = mine.iter().filter(|e| e.status == EnrollmentStatus::Completed).count();
    let in_progress = mine.iter().filter(|e| e.status == EnrollmentStatus::InProgress).count();
    let progress_sum: u32 = mine.iter().map(|e| e.progress).sum();
    LearnerStats {
        enrolled,
        completed,
        in_progress,
        average_progress: rounded_ratio(u64::from(progress_sum), enrolled as u64, 1),
        completion_rate: rounded_ratio(completed as u64, enrolled as u64, 100),
        comments: state.comments.iter().filter(|c| c.user_id == user_id).count(),
    }
}

/// `round(numerator * scale / denominator)`, 0 for an empty denominator.
fn rounded_ratio(numerator: u64, denominator: u64, scale: u64) -> u32 {
    if denominator == 0 {
        return 0;
    }
    let scaled = numerator * scale;
    u32::try_from((scaled + denominator / 2) / denominator).unwrap_or(u32::MAX)
}

/// Site-wide totals for the admin overview.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteStats {
    pub courses: usize,
    pub published_posts: usize,
    pub enrollments: usize,
    pub comments: usize,
    /// Sum of the price of the course behind each enrollment.
    pub revenue: f64,
    pub users: usize,
}

#[must_use]
pub fn site_stats(state: &AppState) -> SiteStats {
    let revenue = state
        .enrollments
        .iter()
        .filter_map(|e| find_course(&state.courses, &e.course_id))
        .map(|c| c.price)
        .sum();
    SiteStats {
        courses: state.courses.len(),
        published_posts: state.blog_posts.iter().filter(|p| p.is_published).count(),
        enrollments: state.enrollments.len(),
        comments: state.comments.len(),
        revenue,
        users: state.users.len(),
    }
}

#[must_use]
pub fn find_course<'a>(courses: &'a [Course], id: &str) -> Option<&'a Course> {
    courses.iter().find(|c| c.id == id)
}

/// The user's enrollment in a course, if any.
#[must_use]
pub fn find_enrollment<'a>(enrollments: &'a [Enrollment], user_id: &str, course_id: &str) -> Option<&'a Enrollment> {
    enrollments.iter().find(|e| e.user_id == user_id && e.course_id == course_id)
}

// =============================================================================
// RECENT ACTIVITY
// =============================================================================

#[must_use]
pub fn recent_enrollments<'a>(items: impl IntoIterator<Item = &'a Enrollment>, limit: usize) -> Vec<&'a Enrollment> {
    let mut items: Vec<_> = items.into_iter().collect();
    items.sort_by_key(|e| Reverse(e.enrolled_at));
    items.truncate(limit);
    items
}

#[must_use]
pub fn recent_posts(posts: &[BlogPost], limit: usize) -> Vec<&BlogPost> {
    let mut items: Vec<_> = posts.iter().collect();
    items.sort_by_key(|p| Reverse(p.updated_at));
    items.truncate(limit);
    items
}

#[must_use]
pub fn recent_comments(comments: &[Comment], limit: usize) -> Vec<&Comment> {
    let mut items: Vec<_> = comments.iter().collect();
    items.sort_by_key(|c| Reverse(c.created_at));
    items.truncate(limit);
    items
}
