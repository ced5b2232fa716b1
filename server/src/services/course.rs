//! Course catalog: listing with filters, lessons, and authoring.
//!
//! DESIGN
//! ======
//! A course row carries the instructor's display name alongside the id, so
//! the catalog renders without a join and survives the account. Lessons live
//! in their own table ordered by `sort_order` and are attached after the
//! course query in one batched lookup.
//!
//! `enrolled_students` is owned by the enrollment service; authoring never
//! writes it.

#[cfg(test)]
#[path = "course_test.rs"]
mod course_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, PgPool, Row};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::services::user::User;
use crate::services::validate::{Checks, FieldError, like_pattern, non_blank};

pub(crate) const COURSE_COLUMNS: &str = "id, title, description, instructor, instructor_id, price, duration, level, \
     thumbnail, category, enrolled_students, rating, created_at, updated_at";

const DEFAULT_THUMBNAIL: &str = "/placeholder.svg?height=400&width=600&text=Course";

/// Catalog filter values that mean "no filter".
const ANY_CATEGORY: &str = "All Categories";
const ANY_LEVEL: &str = "All Levels";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: Option<String>,
    pub content: String,
    pub duration: i32,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub instructor_id: Uuid,
    pub price: f64,
    pub duration: String,
    pub level: Level,
    pub thumbnail: String,
    pub category: String,
    pub lessons: Vec<Lesson>,
    pub enrolled_students: i32,
    pub rating: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

pub(crate) fn course_from_row(row: &PgRow) -> Course {
    let level: String = row.get("level");
    Course {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        instructor: row.get("instructor"),
        instructor_id: row.get("instructor_id"),
        price: row.get("price"),
        duration: row.get("duration"),
        level: Level::parse(&level).unwrap_or(Level::Beginner),
        thumbnail: row.get("thumbnail"),
        category: row.get("category"),
        lessons: Vec::new(),
        enrolled_students: row.get("enrolled_students"),
        rating: row.get("rating"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn lesson_from_row(row: &PgRow) -> Lesson {
    Lesson {
        id: row.get("id"),
        course_id: row.get("course_id"),
        title: row.get("title"),
        description: row.get("description"),
        video_url: row.get("video_url"),
        content: row.get("content"),
        duration: row.get("duration"),
        order: row.get("sort_order"),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    #[error("course not found: {0}")]
    NotFound(Uuid),
    #[error("not allowed to modify this course")]
    Forbidden,
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseFilter {
    pub category: Option<String>,
    pub level: Option<String>,
    pub search: Option<String>,
}

impl CourseFilter {
    /// Blank and "All ..." values dropped.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            category: non_blank(self.category.as_deref()).filter(|c| c != ANY_CATEGORY),
            level: non_blank(self.level.as_deref()).filter(|l| l != ANY_LEVEL),
            search: non_blank(self.search.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub duration: i32,
    #[serde(default)]
    pub order: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInput {
    pub title: String,
    pub description: String,
    /// Display name; defaults to the creating user's name.
    #[serde(default)]
    pub instructor: Option<String>,
    pub price: f64,
    pub duration: String,
    pub level: Level,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub category: String,
    #[serde(default)]
    pub lessons: Vec<LessonInput>,
}

/// Partial update; absent fields keep their value. `lessons`, when present,
/// replaces the whole list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<String>,
    pub level: Option<Level>,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub lessons: Option<Vec<LessonInput>>,
}

fn check_price(checks: &mut Checks, price: f64) {
    checks.check(price.is_finite() && price >= 0.0, "price", "Price must be non-negative");
}

fn check_lessons(checks: &mut Checks, lessons: &[LessonInput]) {
    for lesson in lessons {
        checks.required(&lesson.title, "lessons", "Lesson title is required");
        checks.check(lesson.duration >= 0, "lessons", "Lesson duration must be non-negative");
    }
}

/// # Errors
///
/// Returns every failed field.
pub fn validate_input(input: &CourseInput) -> Result<(), Vec<FieldError>> {
    let mut checks = Checks::new();
    checks
        .required(&input.title, "title", "Title is required")
        .required(&input.description, "description", "Description is required")
        .required(&input.duration, "duration", "Duration is required")
        .required(&input.category, "category", "Category is required");
    check_price(&mut checks, input.price);
    check_lessons(&mut checks, &input.lessons);
    checks.finish()
}

/// # Errors
///
/// Returns every present field that fails.
pub fn validate_patch(patch: &CoursePatch) -> Result<(), Vec<FieldError>> {
    let mut checks = Checks::new();
    let present = [
        (&patch.title, "title", "Title is required"),
        (&patch.description, "description", "Description is required"),
        (&patch.instructor, "instructor", "Instructor is required"),
        (&patch.duration, "duration", "Duration is required"),
        (&patch.category, "category", "Category is required"),
    ];
    for (value, field, message) in present {
        if let Some(value) = value {
            checks.required(value, field, message);
        }
    }
    if let Some(price) = patch.price {
        check_price(&mut checks, price);
    }
    if let Some(lessons) = &patch.lessons {
        check_lessons(&mut checks, lessons);
    }
    checks.finish()
}

// =============================================================================
// QUERIES
// =============================================================================

async fn attach_lessons(pool: &PgPool, courses: &mut [Course]) -> Result<(), sqlx::Error> {
    if courses.is_empty() {
        return Ok(());
    }
    let ids: Vec<Uuid> = courses.iter().map(|c| c.id).collect();
    let rows = sqlx::query(
        "SELECT id, course_id, title, description, video_url, content, duration, sort_order
           FROM lessons
          WHERE course_id = ANY($1)
          ORDER BY sort_order, title",
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    let mut by_course: HashMap<Uuid, Vec<Lesson>> = HashMap::new();
    for row in &rows {
        let lesson = lesson_from_row(row);
        by_course.entry(lesson.course_id).or_default().push(lesson);
    }
    for course in courses {
        course.lessons = by_course.remove(&course.id).unwrap_or_default();
    }
    Ok(())
}

async fn insert_lessons(conn: &mut PgConnection, course_id: Uuid, lessons: &[LessonInput]) -> Result<(), sqlx::Error> {
    for (idx, lesson) in lessons.iter().enumerate() {
        // Missing orders fall back to position.
        let order = if lesson.order > 0 { lesson.order } else { i32::try_from(idx + 1).unwrap_or(i32::MAX) };
        sqlx::query(
            "INSERT INTO lessons (course_id, title, description, video_url, content, duration, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(course_id)
        .bind(lesson.title.trim())
        .bind(&lesson.description)
        .bind(&lesson.video_url)
        .bind(&lesson.content)
        .bind(lesson.duration)
        .bind(order)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

/// Catalog listing, newest first. Search matches title, description or
/// instructor, case-insensitively.
pub async fn list_courses(pool: &PgPool, filter: &CourseFilter) -> Result<Vec<Course>, CourseError> {
    let filter = filter.normalized();
    let rows = sqlx::query(&format!(
        "SELECT {COURSE_COLUMNS}
           FROM courses
          WHERE ($1::text IS NULL OR category = $1)
            AND ($2::text IS NULL OR level = $2)
            AND ($3::text IS NULL OR title ILIKE $3 OR description ILIKE $3 OR instructor ILIKE $3)
          ORDER BY created_at DESC, title"
    ))
    .bind(&filter.category)
    .bind(&filter.level)
    .bind(filter.search.as_deref().map(like_pattern))
    .fetch_all(pool)
    .await?;

    let mut courses: Vec<Course> = rows.iter().map(course_from_row).collect();
    attach_lessons(pool, &mut courses).await?;
    Ok(courses)
}

pub async fn get_course(pool: &PgPool, id: Uuid) -> Result<Course, CourseError> {
    let row = sqlx::query(&format!("SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(CourseError::NotFound(id))?;
    let mut courses = [course_from_row(&row)];
    attach_lessons(pool, &mut courses).await?;
    let [course] = courses;
    Ok(course)
}

/// Publish a new course owned by `actor`.
pub async fn create_course(pool: &PgPool, actor: &User, input: CourseInput) -> Result<Course, CourseError> {
    if !actor.can_author() {
        return Err(CourseError::Forbidden);
    }
    validate_input(&input).map_err(CourseError::Validation)?;
    let instructor = non_blank(input.instructor.as_deref()).unwrap_or_else(|| actor.name.clone());
    let thumbnail = non_blank(input.thumbnail.as_deref()).unwrap_or_else(|| DEFAULT_THUMBNAIL.to_owned());

    let mut tx = pool.begin().await?;
    let row = sqlx::query(&format!(
        "INSERT INTO courses (title, description, instructor, instructor_id, price, duration, level, thumbnail, category)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING {COURSE_COLUMNS}"
    ))
    .bind(input.title.trim())
    .bind(input.description.trim())
    .bind(&instructor)
    .bind(actor.id)
    .bind(input.price)
    .bind(input.duration.trim())
    .bind(input.level.as_str())
    .bind(&thumbnail)
    .bind(input.category.trim())
    .fetch_one(&mut *tx)
    .await?;
    let course = course_from_row(&row);
    insert_lessons(&mut tx, course.id, &input.lessons).await?;
    tx.commit().await?;

    tracing::info!(course_id = %course.id, by = %actor.id, "course created");
    get_course(pool, course.id).await
}

/// Apply a partial update. Only the owning instructor or an admin may edit.
pub async fn update_course(pool: &PgPool, actor: &User, id: Uuid, patch: CoursePatch) -> Result<Course, CourseError> {
    validate_patch(&patch).map_err(CourseError::Validation)?;
    let current = get_course(pool, id).await?;
    if !actor.can_manage(current.instructor_id) {
        return Err(CourseError::Forbidden);
    }

    let trimmed = |v: Option<String>| v.map(|s| s.trim().to_owned());
    let mut tx = pool.begin().await?;
    sqlx::query(
        "UPDATE courses SET
             title       = COALESCE($2, title),
             description = COALESCE($3, description),
             instructor  = COALESCE($4, instructor),
             price       = COALESCE($5, price),
             duration    = COALESCE($6, duration),
             level       = COALESCE($7, level),
             thumbnail   = COALESCE($8, thumbnail),
             category    = COALESCE($9, category),
             updated_at  = now()
         WHERE id = $1",
    )
    .bind(id)
    .bind(trimmed(patch.title))
    .bind(trimmed(patch.description))
    .bind(trimmed(patch.instructor))
    .bind(patch.price)
    .bind(trimmed(patch.duration))
    .bind(patch.level.map(Level::as_str))
    .bind(non_blank(patch.thumbnail.as_deref()))
    .bind(trimmed(patch.category))
    .execute(&mut *tx)
    .await?;

    if let Some(lessons) = &patch.lessons {
        sqlx::query("DELETE FROM lessons WHERE course_id = $1").bind(id).execute(&mut *tx).await?;
        insert_lessons(&mut tx, id, lessons).await?;
    }
    tx.commit().await?;

    get_course(pool, id).await
}

/// Delete a course with its lessons and enrollments.
pub async fn delete_course(pool: &PgPool, actor: &User, id: Uuid) -> Result<(), CourseError> {
    let current = get_course(pool, id).await?;
    if !actor.can_manage(current.instructor_id) {
        return Err(CourseError::Forbidden);
    }
    sqlx::query("DELETE FROM courses WHERE id = $1").bind(id).execute(pool).await?;
    tracing::info!(course_id = %id, by = %actor.id, "course deleted");
    Ok(())
}
