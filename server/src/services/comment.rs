//! Comments on blog posts, with one level of replies.
//!
//! A reply to a reply is re-parented onto the thread's root comment, so
//! `parent_id` always points at a top-level comment. The author's name and
//! avatar are copied onto the comment at creation.

#[cfg(test)]
#[path = "comment_test.rs"]
mod comment_test;

use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::services::user::User;
use crate::services::validate::{Checks, FieldError, char_len};

const COMMENT_COLUMNS: &str = "id, post_id, user_id, user_name, user_avatar, content, parent_id, created_at, updated_at";

const CONTENT_MAX: usize = 2000;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub content: String,
    pub parent_id: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

fn comment_from_row(row: &PgRow) -> Comment {
    Comment {
        id: row.get("id"),
        post_id: row.get("post_id"),
        user_id: row.get("user_id"),
        user_name: row.get("user_name"),
        user_avatar: row.get("user_avatar"),
        content: row.get("content"),
        parent_id: row.get("parent_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    #[error("comment not found: {0}")]
    NotFound(Uuid),
    #[error("parent comment not found: {0}")]
    ParentNotFound(Uuid),
    #[error("not allowed to modify this comment")]
    Forbidden,
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentInput {
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}

/// # Errors
///
/// Returns a field error for blank or overlong content.
pub fn validate_content(content: &str) -> Result<(), Vec<FieldError>> {
    let mut checks = Checks::new();
    checks
        .required(content, "content", "Content is required")
        .check(char_len(content) <= CONTENT_MAX, "content", "Comment must be at most 2000 characters");
    checks.finish()
}

/// The thread root a new reply should attach to, given the comment it
/// answers.
#[must_use]
pub fn thread_root(parent: &Comment) -> Uuid {
    parent.parent_id.unwrap_or(parent.id)
}

// =============================================================================
// QUERIES
// =============================================================================

/// Every comment the viewer may see, newest first. Comments on hidden
/// drafts are left out.
pub async fn list_all(pool: &PgPool, viewer: Option<&User>) -> Result<Vec<Comment>, CommentError> {
    let rows = sqlx::query(&format!(
        "SELECT {COMMENT_COLUMNS}
           FROM comments
          WHERE post_id IN (SELECT id FROM blog_posts WHERE is_published OR $1 OR author_id = $2)
          ORDER BY created_at DESC"
    ))
    .bind(viewer.is_some_and(User::is_admin))
    .bind(viewer.map(|v| v.id))
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(comment_from_row).collect())
}

/// Comments on one post, newest first.
pub async fn list_for_post(pool: &PgPool, post_id: Uuid) -> Result<Vec<Comment>, CommentError> {
    let rows = sqlx::query(&format!(
        "SELECT {COMMENT_COLUMNS} FROM comments WHERE post_id = $1 ORDER BY created_at DESC"
    ))
    .bind(post_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.iter().map(comment_from_row).collect())
}

/// Fetch a comment, requiring it to belong to `post_id`.
async fn get_on_post(pool: &PgPool, post_id: Uuid, id: Uuid) -> Result<Option<Comment>, sqlx::Error> {
    let row = sqlx::query(&format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE id = $1 AND post_id = $2"))
        .bind(id)
        .bind(post_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.as_ref().map(comment_from_row))
}

/// Post a comment as `author`. The caller has already checked the post.
pub async fn create_comment(
    pool: &PgPool,
    author: &User,
    post_id: Uuid,
    input: CommentInput,
) -> Result<Comment, CommentError> {
    validate_content(&input.content).map_err(CommentError::Validation)?;
    let parent_id = match input.parent_id {
        Some(pid) => {
            let parent = get_on_post(pool, post_id, pid).await?.ok_or(CommentError::ParentNotFound(pid))?;
            Some(thread_root(&parent))
        }
        None => None,
    };

    let row = sqlx::query(&format!(
        "INSERT INTO comments (post_id, user_id, user_name, user_avatar, content, parent_id)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {COMMENT_COLUMNS}"
    ))
    .bind(post_id)
    .bind(author.id)
    .bind(&author.name)
    .bind(&author.avatar)
    .bind(input.content.trim())
    .bind(parent_id)
    .fetch_one(pool)
    .await?;
    Ok(comment_from_row(&row))
}

/// Edit the text of a comment. Owner or admin only.
pub async fn update_comment(
    pool: &PgPool,
    actor: &User,
    post_id: Uuid,
    id: Uuid,
    content: &str,
) -> Result<Comment, CommentError> {
    validate_content(content).map_err(CommentError::Validation)?;
    let current = get_on_post(pool, post_id, id).await?.ok_or(CommentError::NotFound(id))?;
    if !actor.can_manage(current.user_id) {
        return Err(CommentError::Forbidden);
    }
    let row = sqlx::query(&format!(
        "UPDATE comments SET content = $2, updated_at = now() WHERE id = $1 RETURNING {COMMENT_COLUMNS}"
    ))
    .bind(id)
    .bind(content.trim())
    .fetch_optional(pool)
    .await?
    .ok_or(CommentError::NotFound(id))?;
    Ok(comment_from_row(&row))
}

/// Delete a comment and its replies. Owner or admin only.
pub async fn delete_comment(pool: &PgPool, actor: &User, post_id: Uuid, id: Uuid) -> Result<(), CommentError> {
    let current = get_on_post(pool, post_id, id).await?.ok_or(CommentError::NotFound(id))?;
    if !actor.can_manage(current.user_id) {
        return Err(CommentError::Forbidden);
    }
    sqlx::query("DELETE FROM comments WHERE id = $1").bind(id).execute(pool).await?;
    tracing::info!(comment_id = %id, %post_id, by = %actor.id, "comment deleted");
    Ok(())
}
