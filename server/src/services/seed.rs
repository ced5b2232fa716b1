//! Demo content for a fresh database.
//!
//! The fixture in `db/seed.json` names records by short keys (`"alice"`,
//! `"react"`) and cross-references them by key; ids are assigned by Postgres
//! at insert time. Every demo account uses [`DEMO_PASSWORD`].

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use sqlx::{PgPool, Row};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::services::auth::{self, AuthError};

pub const DEMO_PASSWORD: &str = "password123";

const FIXTURE: &str = include_str!("../db/seed.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("invalid seed fixture: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("seed {kind} references unknown key {key:?}")]
    UnknownKey { kind: &'static str, key: String },
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<AuthError> for SeedError {
    fn from(err: AuthError) -> Self {
        Self::Hash(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedUser {
    pub key: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedLesson {
    pub title: String,
    pub description: String,
    pub content: String,
    pub duration: i32,
    pub order: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedCourse {
    pub key: String,
    pub title: String,
    pub description: String,
    /// User key.
    pub instructor: String,
    pub price: f64,
    pub duration: String,
    pub level: String,
    pub thumbnail: String,
    pub category: String,
    pub enrolled_students: i32,
    pub rating: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub lessons: Vec<SeedLesson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedEnrollment {
    pub user: String,
    pub course: String,
    pub progress: i32,
    pub completed_lessons: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub enrolled_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedPost {
    pub key: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    /// User key.
    pub author: String,
    pub thumbnail: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub published_at: OffsetDateTime,
    pub is_published: bool,
    pub views: i32,
    pub likes: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedComment {
    pub post: String,
    pub user: String,
    pub content: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub struct SeedData {
    pub users: Vec<SeedUser>,
    pub courses: Vec<SeedCourse>,
    pub enrollments: Vec<SeedEnrollment>,
    pub posts: Vec<SeedPost>,
    pub comments: Vec<SeedComment>,
}

impl SeedData {
    /// # Errors
    ///
    /// Fails on malformed JSON or a dangling key.
    pub fn parse(raw: &str) -> Result<Self, SeedError> {
        let data: Self = serde_json::from_str(raw)?;
        data.check_references()?;
        Ok(data)
    }

    /// The fixture compiled into the binary.
    ///
    /// # Errors
    ///
    /// Fails only if the bundled fixture is broken.
    pub fn bundled() -> Result<Self, SeedError> {
        Self::parse(FIXTURE)
    }

    fn check_references(&self) -> Result<(), SeedError> {
        let users: HashSet<&str> = self.users.iter().map(|u| u.key.as_str()).collect();
        let courses: HashSet<&str> = self.courses.iter().map(|c| c.key.as_str()).collect();
        let posts: HashSet<&str> = self.posts.iter().map(|p| p.key.as_str()).collect();

        let refs = self
            .courses
            .iter()
            .map(|c| ("course instructor", &users, &c.instructor))
            .chain(self.posts.iter().map(|p| ("post author", &users, &p.author)))
            .chain(self.enrollments.iter().map(|e| ("enrollment user", &users, &e.user)))
            .chain(self.enrollments.iter().map(|e| ("enrollment course", &courses, &e.course)))
            .chain(self.comments.iter().map(|c| ("comment user", &users, &c.user)))
            .chain(self.comments.iter().map(|c| ("comment post", &posts, &c.post)));

        for (kind, known, key) in refs {
            if !known.contains(key.as_str()) {
                return Err(SeedError::UnknownKey { kind, key: key.clone() });
            }
        }
        Ok(())
    }
}

fn lookup(ids: &HashMap<String, Uuid>, kind: &'static str, key: &str) -> Result<Uuid, SeedError> {
    ids.get(key).copied().ok_or_else(|| SeedError::UnknownKey { kind, key: key.to_owned() })
}

/// Insert the bundled demo content unless any account already exists.
/// Returns whether anything was inserted.
pub async fn seed_if_empty(pool: &PgPool) -> Result<bool, SeedError> {
    let existing: i64 = sqlx::query("SELECT COUNT(*) AS n FROM users").fetch_one(pool).await?.get("n");
    if existing > 0 {
        return Ok(false);
    }
    let data = SeedData::bundled()?;
    insert(pool, &data).await?;
    tracing::info!(
        users = data.users.len(),
        courses = data.courses.len(),
        posts = data.posts.len(),
        "seeded demo data"
    );
    Ok(true)
}

async fn insert(pool: &PgPool, data: &SeedData) -> Result<(), SeedError> {
    let mut tx = pool.begin().await?;

    let mut user_ids = HashMap::new();
    for user in &data.users {
        let hash = auth::hash_password(DEMO_PASSWORD)?;
        let id: Uuid = sqlx::query(
            "INSERT INTO users (email, name, password_hash, role, avatar, bio, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(&hash)
        .bind(&user.role)
        .bind(&user.avatar)
        .bind(&user.bio)
        .bind(user.created_at)
        .fetch_one(&mut *tx)
        .await?
        .get("id");
        user_ids.insert(user.key.clone(), id);
    }
    let names: HashMap<&str, &str> = data.users.iter().map(|u| (u.key.as_str(), u.name.as_str())).collect();

    let mut course_ids = HashMap::new();
    for course in &data.courses {
        let instructor_id = lookup(&user_ids, "course instructor", &course.instructor)?;
        let id: Uuid = sqlx::query(
            "INSERT INTO courses (title, description, instructor, instructor_id, price, duration, level,
                                  thumbnail, category, enrolled_students, rating, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12) RETURNING id",
        )
        .bind(&course.title)
        .bind(&course.description)
        .bind(names.get(course.instructor.as_str()).copied().unwrap_or_default())
        .bind(instructor_id)
        .bind(course.price)
        .bind(&course.duration)
        .bind(&course.level)
        .bind(&course.thumbnail)
        .bind(&course.category)
        .bind(course.enrolled_students)
        .bind(course.rating)
        .bind(course.created_at)
        .fetch_one(&mut *tx)
        .await?
        .get("id");
        for lesson in &course.lessons {
            sqlx::query(
                "INSERT INTO lessons (course_id, title, description, content, duration, sort_order)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(id)
            .bind(&lesson.title)
            .bind(&lesson.description)
            .bind(&lesson.content)
            .bind(lesson.duration)
            .bind(lesson.order)
            .execute(&mut *tx)
            .await?;
        }
        course_ids.insert(course.key.clone(), id);
    }

    // Counts come from the fixture, so enrollments do not bump them.
    for e in &data.enrollments {
        sqlx::query(
            "INSERT INTO enrollments (user_id, course_id, progress, completed_lessons, enrolled_at, completed_at, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(lookup(&user_ids, "enrollment user", &e.user)?)
        .bind(lookup(&course_ids, "enrollment course", &e.course)?)
        .bind(e.progress)
        .bind(&e.completed_lessons)
        .bind(e.enrolled_at)
        .bind(e.completed_at)
        .bind(&e.status)
        .execute(&mut *tx)
        .await?;
    }

    let mut post_ids = HashMap::new();
    for post in &data.posts {
        let id: Uuid = sqlx::query(
            "INSERT INTO blog_posts (title, content, excerpt, author, author_id, thumbnail, category, tags,
                                     published_at, updated_at, is_published, views, likes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9, $10, $11, $12) RETURNING id",
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(names.get(post.author.as_str()).copied().unwrap_or_default())
        .bind(lookup(&user_ids, "post author", &post.author)?)
        .bind(&post.thumbnail)
        .bind(&post.category)
        .bind(&post.tags)
        .bind(post.published_at)
        .bind(post.is_published)
        .bind(post.views)
        .bind(post.likes)
        .fetch_one(&mut *tx)
        .await?
        .get("id");
        post_ids.insert(post.key.clone(), id);
    }

    let avatars: HashMap<&str, Option<&str>> =
        data.users.iter().map(|u| (u.key.as_str(), u.avatar.as_deref())).collect();
    for c in &data.comments {
        sqlx::query(
            "INSERT INTO comments (post_id, user_id, user_name, user_avatar, content, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)",
        )
        .bind(lookup(&post_ids, "comment post", &c.post)?)
        .bind(lookup(&user_ids, "comment user", &c.user)?)
        .bind(names.get(c.user.as_str()).copied().unwrap_or_default())
        .bind(avatars.get(c.user.as_str()).copied().flatten())
        .bind(&c.content)
        .bind(c.created_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}
