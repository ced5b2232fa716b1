//! Enrollments: who is taking which course and how far along they are.
//!
//! CONSISTENCY
//! ===========
//! Enrolling inserts the enrollment and bumps the course's
//! `enrolled_students` in one transaction, with the course row locked, so the
//! counter always matches the rows that were added through this path.
//! Removing an enrollment decrements it the same way.

#[cfg(test)]
#[path = "enrollment_test.rs"]
mod enrollment_test;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::services::course::{self, Course};
use crate::services::user::User;
use crate::services::validate::{Checks, FieldError};

const ENROLLMENT_COLUMNS: &str = "id, user_id, course_id, progress, completed_lessons, enrolled_at, completed_at, status";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnrollmentStatus {
    #[default]
    InProgress,
    Completed,
    Paused,
}

impl EnrollmentStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Paused => "paused",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "paused" => Some(Self::Paused),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub progress: i32,
    pub completed_lessons: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub enrolled_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    pub status: EnrollmentStatus,
}

fn enrollment_from_row(row: &PgRow) -> Enrollment {
    let status: String = row.get("status");
    Enrollment {
        id: row.get("id"),
        user_id: row.get("user_id"),
        course_id: row.get("course_id"),
        progress: row.get("progress"),
        completed_lessons: row.get("completed_lessons"),
        enrolled_at: row.get("enrolled_at"),
        completed_at: row.get("completed_at"),
        status: EnrollmentStatus::parse(&status).unwrap_or_default(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnrollError {
    #[error("course not found: {0}")]
    CourseNotFound(Uuid),
    #[error("enrollment not found: {0}")]
    NotFound(Uuid),
    #[error("Already enrolled in this course")]
    AlreadyEnrolled,
    #[error("not allowed to modify this enrollment")]
    Forbidden,
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentFilter {
    pub user_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
}

/// The filter a caller is actually allowed to run.
///
/// Anonymous callers see nothing (`None`). Non-admins are pinned to their
/// own enrollments whatever `userId` they ask for. Admins get the request
/// as given.
#[must_use]
pub fn scoped_filter(actor: Option<&User>, requested: EnrollmentFilter) -> Option<EnrollmentFilter> {
    let actor = actor?;
    if actor.is_admin() {
        Some(requested)
    } else {
        Some(EnrollmentFilter { user_id: Some(actor.id), course_id: requested.course_id })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentUpdate {
    pub progress: Option<i32>,
    pub status: Option<EnrollmentStatus>,
    pub completed_lessons: Option<Vec<String>>,
}

/// The mutable part of an enrollment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    pub progress: i32,
    pub status: EnrollmentStatus,
    pub completed_lessons: Vec<String>,
    pub completed_at: Option<OffsetDateTime>,
}

impl From<&Enrollment> for ProgressState {
    fn from(e: &Enrollment) -> Self {
        Self {
            progress: e.progress,
            status: e.status,
            completed_lessons: e.completed_lessons.clone(),
            completed_at: e.completed_at,
        }
    }
}

/// Apply an update to the current progress.
///
/// An enrollment is completed exactly when its progress is 100. Reaching 100
/// without an explicit status completes it, and lowering a completed
/// enrollment's progress reopens it. An explicit `completed` with no progress
/// pins progress at 100. `completed_at` is stamped with `now` on entering the
/// completed state and cleared on leaving it.
///
/// # Errors
///
/// Returns a field error when progress is outside 0..=100, or when an
/// explicit status disagrees with the resulting progress.
pub fn next_state(
    current: &ProgressState,
    update: EnrollmentUpdate,
    now: OffsetDateTime,
) -> Result<ProgressState, Vec<FieldError>> {
    let mut checks = Checks::new();
    if let Some(progress) = update.progress {
        checks.check((0..=100).contains(&progress), "progress", "Progress must be between 0 and 100");
    }
    checks.finish()?;

    let progress = match (update.status, update.progress) {
        (Some(EnrollmentStatus::Completed), None) => 100,
        (_, explicit) => explicit.unwrap_or(current.progress),
    };
    let status = match update.status {
        Some(status) => status,
        None if progress == 100 => EnrollmentStatus::Completed,
        None if current.status == EnrollmentStatus::Completed => EnrollmentStatus::InProgress,
        None => current.status,
    };

    let mut checks = Checks::new();
    checks.check(
        (status == EnrollmentStatus::Completed) == (progress == 100),
        "status",
        "Status must be completed exactly when progress is 100",
    );
    checks.finish()?;

    let completed_at = match (status, current.completed_at) {
        (EnrollmentStatus::Completed, Some(at)) => Some(at),
        (EnrollmentStatus::Completed, None) => Some(now),
        _ => None,
    };
    Ok(ProgressState {
        progress,
        status,
        completed_lessons: update.completed_lessons.unwrap_or_else(|| current.completed_lessons.clone()),
        completed_at,
    })
}

// =============================================================================
// QUERIES
// =============================================================================

/// Enrollments matching `filter`, newest first.
pub async fn list_enrollments(pool: &PgPool, filter: EnrollmentFilter) -> Result<Vec<Enrollment>, EnrollError> {
    let rows = sqlx::query(&format!(
        "SELECT {ENROLLMENT_COLUMNS}
           FROM enrollments
          WHERE ($1::uuid IS NULL OR user_id = $1)
            AND ($2::uuid IS NULL OR course_id = $2)
          ORDER BY enrolled_at DESC"
    ))
    .bind(filter.user_id)
    .bind(filter.course_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(enrollment_from_row).collect())
}

pub async fn get_enrollment(pool: &PgPool, id: Uuid) -> Result<Enrollment, EnrollError> {
    let row = sqlx::query(&format!("SELECT {ENROLLMENT_COLUMNS} FROM enrollments WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(EnrollError::NotFound(id))?;
    Ok(enrollment_from_row(&row))
}

/// Enroll `user` in a course, returning the new enrollment and the course
/// with its updated count.
pub async fn enroll(pool: &PgPool, user: &User, course_id: Uuid) -> Result<(Enrollment, Course), EnrollError> {
    let mut tx = pool.begin().await?;

    let locked = sqlx::query("SELECT id FROM courses WHERE id = $1 FOR UPDATE")
        .bind(course_id)
        .fetch_optional(&mut *tx)
        .await?;
    if locked.is_none() {
        return Err(EnrollError::CourseNotFound(course_id));
    }

    let row = sqlx::query(&format!(
        "INSERT INTO enrollments (user_id, course_id)
         VALUES ($1, $2)
         ON CONFLICT (user_id, course_id) DO NOTHING
         RETURNING {ENROLLMENT_COLUMNS}"
    ))
    .bind(user.id)
    .bind(course_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(EnrollError::AlreadyEnrolled)?;

    sqlx::query("UPDATE courses SET enrolled_students = enrolled_students + 1 WHERE id = $1")
        .bind(course_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    let enrollment = enrollment_from_row(&row);
    tracing::info!(enrollment_id = %enrollment.id, user_id = %user.id, %course_id, "enrolled");
    let course = course::get_course(pool, course_id).await.map_err(|e| match e {
        course::CourseError::Database(db) => EnrollError::Database(db),
        _ => EnrollError::CourseNotFound(course_id),
    })?;
    Ok((enrollment, course))
}

/// Update progress or status. Owner or admin only.
pub async fn update_enrollment(
    pool: &PgPool,
    actor: &User,
    id: Uuid,
    update: EnrollmentUpdate,
) -> Result<Enrollment, EnrollError> {
    let current = get_enrollment(pool, id).await?;
    if !actor.can_manage(current.user_id) {
        return Err(EnrollError::Forbidden);
    }
    let next = next_state(&ProgressState::from(&current), update, OffsetDateTime::now_utc())
        .map_err(EnrollError::Validation)?;

    let row = sqlx::query(&format!(
        "UPDATE enrollments
            SET progress = $2, status = $3, completed_lessons = $4, completed_at = $5
          WHERE id = $1
          RETURNING {ENROLLMENT_COLUMNS}"
    ))
    .bind(id)
    .bind(next.progress)
    .bind(next.status.as_str())
    .bind(&next.completed_lessons)
    .bind(next.completed_at)
    .fetch_optional(pool)
    .await?
    .ok_or(EnrollError::NotFound(id))?;
    Ok(enrollment_from_row(&row))
}

/// Remove an enrollment and release its seat on the course.
pub async fn delete_enrollment(pool: &PgPool, actor: &User, id: Uuid) -> Result<(), EnrollError> {
    let current = get_enrollment(pool, id).await?;
    if !actor.can_manage(current.user_id) {
        return Err(EnrollError::Forbidden);
    }

    let mut tx = pool.begin().await?;
    let deleted = sqlx::query("DELETE FROM enrollments WHERE id = $1").bind(id).execute(&mut *tx).await?;
    if deleted.rows_affected() == 0 {
        return Err(EnrollError::NotFound(id));
    }
    sqlx::query("UPDATE courses SET enrolled_students = GREATEST(enrolled_students - 1, 0) WHERE id = $1")
        .bind(current.course_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::info!(enrollment_id = %id, by = %actor.id, "enrollment removed");
    Ok(())
}
