//! Blog posts: listing, reading, and authoring.
//!
//! Drafts (`is_published = false`) are visible only to admins and to their
//! author. Reading a single post counts a view.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::services::user::User;
use crate::services::validate::{Checks, FieldError, like_pattern, non_blank};

const POST_COLUMNS: &str = "id, title, content, excerpt, author, author_id, thumbnail, category, tags, \
     published_at, updated_at, is_published, views, likes";

const DEFAULT_THUMBNAIL: &str = "/placeholder.svg?height=400&width=600&text=Blog+Post";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Views,
    Likes,
}

impl SortOrder {
    /// Unknown values fall back to newest first.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("oldest") => Self::Oldest,
            Some("views" | "popular") => Self::Views,
            Some("likes" | "liked") => Self::Likes,
            _ => Self::Newest,
        }
    }

    #[must_use]
    pub fn order_clause(self) -> &'static str {
        match self {
            Self::Newest => "published_at DESC, title",
            Self::Oldest => "published_at ASC, title",
            Self::Views => "views DESC, published_at DESC",
            Self::Likes => "likes DESC, published_at DESC",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub author_id: Uuid,
    pub thumbnail: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub published_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub is_published: bool,
    pub views: i32,
    pub likes: i32,
}

impl BlogPost {
    #[must_use]
    pub fn visible_to(&self, viewer: Option<&User>) -> bool {
        self.is_published || viewer.is_some_and(|v| v.can_manage(self.author_id))
    }
}

fn post_from_row(row: &PgRow) -> BlogPost {
    BlogPost {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        excerpt: row.get("excerpt"),
        author: row.get("author"),
        author_id: row.get("author_id"),
        thumbnail: row.get("thumbnail"),
        category: row.get("category"),
        tags: row.get("tags"),
        published_at: row.get("published_at"),
        updated_at: row.get("updated_at"),
        is_published: row.get("is_published"),
        views: row.get("views"),
        likes: row.get("likes"),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    #[error("blog post not found: {0}")]
    NotFound(Uuid),
    #[error("not allowed to modify this post")]
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
#[serde(rename_all = "camelCase")]
pub struct PostFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub published: Option<String>,
    pub sort_by: Option<String>,
}

impl PostFilter {
    #[must_use]
    pub fn published_only(&self) -> bool {
        self.published.as_deref() == Some("true")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostInput {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_published: bool,
}

/// Partial update; absent fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_published: Option<bool>,
}

/// Trimmed, non-empty, first occurrence wins.
#[must_use]
pub fn clean_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if !out.iter().any(|seen| seen == tag) {
            out.push(tag.to_owned());
        }
    }
    out
}

/// # Errors
///
/// Returns every failed field.
pub fn validate_input(input: &PostInput) -> Result<(), Vec<FieldError>> {
    let mut checks = Checks::new();
    checks
        .required(&input.title, "title", "Title is required")
        .required(&input.content, "content", "Content is required")
        .required(&input.excerpt, "excerpt", "Excerpt is required")
        .required(&input.category, "category", "Category is required");
    checks.finish()
}

/// # Errors
///
/// Returns every present field that fails.
pub fn validate_patch(patch: &PostPatch) -> Result<(), Vec<FieldError>> {
    let mut checks = Checks::new();
    let present = [
        (&patch.title, "title", "Title is required"),
        (&patch.content, "content", "Content is required"),
        (&patch.excerpt, "excerpt", "Excerpt is required"),
        (&patch.author, "author", "Author is required"),
        (&patch.category, "category", "Category is required"),
    ];
    for (value, field, message) in present {
        if let Some(value) = value {
            checks.required(value, field, message);
        }
    }
    checks.finish()
}

// =============================================================================
// QUERIES
// =============================================================================

/// Posts the viewer may see, filtered and sorted. Search covers title,
/// content, excerpt, author and tags.
pub async fn list_posts(pool: &PgPool, viewer: Option<&User>, filter: &PostFilter) -> Result<Vec<BlogPost>, BlogError> {
    let order = SortOrder::parse(filter.sort_by.as_deref());
    let rows = sqlx::query(&format!(
        "SELECT {POST_COLUMNS}
           FROM blog_posts
          WHERE (is_published OR (NOT $1 AND ($2 OR author_id = $3)))
            AND ($4::text IS NULL OR category = $4)
            AND ($5::text IS NULL
                 OR title ILIKE $5 OR content ILIKE $5 OR excerpt ILIKE $5 OR author ILIKE $5
                 OR EXISTS (SELECT 1 FROM unnest(tags) AS tag WHERE tag ILIKE $5))
          ORDER BY {}",
        order.order_clause()
    ))
    .bind(filter.published_only())
    .bind(viewer.is_some_and(User::is_admin))
    .bind(viewer.map(|v| v.id))
    .bind(non_blank(filter.category.as_deref()))
    .bind(non_blank(filter.search.as_deref()).map(|s| like_pattern(&s)))
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(post_from_row).collect())
}

async fn fetch_post(pool: &PgPool, id: Uuid) -> Result<BlogPost, BlogError> {
    let row = sqlx::query(&format!("SELECT {POST_COLUMNS} FROM blog_posts WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(BlogError::NotFound(id))?;
    Ok(post_from_row(&row))
}

/// Read one post, counting the view. Hidden drafts are reported as missing.
pub async fn get_post(pool: &PgPool, viewer: Option<&User>, id: Uuid) -> Result<BlogPost, BlogError> {
    let post = fetch_post(pool, id).await?;
    if !post.visible_to(viewer) {
        return Err(BlogError::NotFound(id));
    }
    let row = sqlx::query(&format!("UPDATE blog_posts SET views = views + 1 WHERE id = $1 RETURNING {POST_COLUMNS}"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(BlogError::NotFound(id))?;
    Ok(post_from_row(&row))
}

/// Whether a post exists and the viewer may see it. Used by the comment
/// routes, which must not count views.
pub async fn ensure_visible(pool: &PgPool, viewer: Option<&User>, id: Uuid) -> Result<(), BlogError> {
    let post = fetch_post(pool, id).await?;
    if post.visible_to(viewer) { Ok(()) } else { Err(BlogError::NotFound(id)) }
}

pub async fn create_post(pool: &PgPool, actor: &User, input: PostInput) -> Result<BlogPost, BlogError> {
    if !actor.can_author() {
        return Err(BlogError::Forbidden);
    }
    validate_input(&input).map_err(BlogError::Validation)?;
    let author = non_blank(input.author.as_deref()).unwrap_or_else(|| actor.name.clone());
    let thumbnail = non_blank(input.thumbnail.as_deref()).unwrap_or_else(|| DEFAULT_THUMBNAIL.to_owned());

    let row = sqlx::query(&format!(
        "INSERT INTO blog_posts (title, content, excerpt, author, author_id, thumbnail, category, tags, is_published)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING {POST_COLUMNS}"
    ))
    .bind(input.title.trim())
    .bind(&input.content)
    .bind(input.excerpt.trim())
    .bind(&author)
    .bind(actor.id)
    .bind(&thumbnail)
    .bind(input.category.trim())
    .bind(clean_tags(&input.tags))
    .bind(input.is_published)
    .fetch_one(pool)
    .await?;

    let post = post_from_row(&row);
    tracing::info!(post_id = %post.id, by = %actor.id, published = post.is_published, "post created");
    Ok(post)
}

/// Apply a partial update. Publishing a draft stamps `published_at`.
pub async fn update_post(pool: &PgPool, actor: &User, id: Uuid, patch: PostPatch) -> Result<BlogPost, BlogError> {
    validate_patch(&patch).map_err(BlogError::Validation)?;
    let current = fetch_post(pool, id).await?;
    if !actor.can_manage(current.author_id) {
        return Err(BlogError::Forbidden);
    }
    let newly_published = !current.is_published && patch.is_published == Some(true);

    let trimmed = |v: Option<String>| v.map(|s| s.trim().to_owned());
    let row = sqlx::query(&format!(
        "UPDATE blog_posts SET
             title        = COALESCE($2, title),
             content      = COALESCE($3, content),
             excerpt      = COALESCE($4, excerpt),
             author       = COALESCE($5, author),
             thumbnail    = COALESCE($6, thumbnail),
             category     = COALESCE($7, category),
             tags         = COALESCE($8, tags),
             is_published = COALESCE($9, is_published),
             published_at = CASE WHEN $10 THEN now() ELSE published_at END,
             updated_at   = now()
         WHERE id = $1
         RETURNING {POST_COLUMNS}"
    ))
    .bind(id)
    .bind(trimmed(patch.title))
    .bind(patch.content)
    .bind(trimmed(patch.excerpt))
    .bind(trimmed(patch.author))
    .bind(non_blank(patch.thumbnail.as_deref()))
    .bind(trimmed(patch.category))
    .bind(patch.tags.as_deref().map(clean_tags))
    .bind(patch.is_published)
    .bind(newly_published)
    .fetch_optional(pool)
    .await?
    .ok_or(BlogError::NotFound(id))?;
    Ok(post_from_row(&row))
}

/// Delete a post and its comments.
pub async fn delete_post(pool: &PgPool, actor: &User, id: Uuid) -> Result<(), BlogError> {
    let current = fetch_post(pool, id).await?;
    if !actor.can_manage(current.author_id) {
        return Err(BlogError::Forbidden);
    }
    sqlx::query("DELETE FROM blog_posts WHERE id = $1").bind(id).execute(pool).await?;
    tracing::info!(post_id = %id, by = %actor.id, "post deleted");
    Ok(())
}
