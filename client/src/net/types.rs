//! REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Field names are camelCase on the wire and dates are RFC 3339 strings.
//! Every domain record implements `crudview::Row` so admin tables can search
//! and sort it by the same keys the JSON uses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use crudview::{CellValue, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

// =============================================================================
// ENUMS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Student,
    Instructor,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
            Self::Instructor => "instructor",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Self::Admin),
            "student" => Some(Self::Student),
            "instructor" => Some(Self::Instructor),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == raw)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
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
}

// =============================================================================
// ENTITIES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub video_url: Option<String>,
    pub content: String,
    /// Minutes, at least 1.
    pub duration: u32,
    /// 1-based position within the course.
    pub order: u32,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub instructor_id: String,
    pub price: f64,
    /// Free-form, e.g. `"40 hours"`.
    pub duration: String,
    pub level: Level,
    pub thumbnail: String,
    pub category: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    pub enrolled_students: u32,
    /// 0 to 5.
    pub rating: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    /// Percent, 0 to 100.
    pub progress: u32,
    #[serde(default)]
    pub completed_lessons: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub enrolled_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    pub status: EnrollmentStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub author_id: String,
    pub thumbnail: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub published_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub is_published: bool,
    pub views: u32,
    pub likes: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
    pub content: String,
    /// Set on replies; replies are one level deep.
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

// =============================================================================
// REQUESTS & RESPONSES
// =============================================================================

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

/// Body for course create and update. Update treats it as a full replacement
/// of the editable fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub price: f64,
    pub duration: String,
    pub level: Level,
    pub category: String,
    pub thumbnail: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub thumbnail: String,
    pub is_published: bool,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDraft {
    pub content: String,
    pub parent_id: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EnrollResponse {
    pub enrollment: Enrollment,
    pub course: Course,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Error body returned by every failing endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub details: Vec<FieldError>,
}

// =============================================================================
// ROW ACCESS
// =============================================================================

impl Row for User {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "email" => self.email.as_str().into(),
            "name" => self.name.as_str().into(),
            "role" => self.role.as_str().into(),
            "avatar" => self.avatar.clone().into(),
            "bio" => self.bio.clone().into(),
            "createdAt" => self.created_at.into(),
            _ => CellValue::Null,
        }
    }

    fn fields(&self) -> Vec<CellValue> {
        ["id", "email", "name", "role", "avatar", "bio", "createdAt"].iter().map(|k| self.field(k)).collect()
    }
}

impl Row for Course {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "title" => self.title.as_str().into(),
            "description" => self.description.as_str().into(),
            "instructor" => self.instructor.as_str().into(),
            "instructorId" => self.instructor_id.as_str().into(),
            "price" => self.price.into(),
            "duration" => self.duration.as_str().into(),
            "level" => self.level.as_str().into(),
            "thumbnail" => self.thumbnail.as_str().into(),
            "category" => self.category.as_str().into(),
            "lessons" => CellValue::List(self.lessons.iter().map(|l| l.title.as_str().into()).collect()),
            "enrolledStudents" => self.enrolled_students.into(),
            "rating" => self.rating.into(),
            "createdAt" => self.created_at.into(),
            "updatedAt" => self.updated_at.into(),
            _ => CellValue::Null,
        }
    }

    fn fields(&self) -> Vec<CellValue> {
        [
            "id",
            "title",
            "description",
            "instructor",
            "instructorId",
            "price",
            "duration",
            "level",
            "thumbnail",
            "category",
            "lessons",
            "enrolledStudents",
            "rating",
            "createdAt",
            "updatedAt",
        ]
        .iter()
        .map(|k| self.field(k))
        .collect()
    }
}

impl Row for Enrollment {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "userId" => self.user_id.as_str().into(),
            "courseId" => self.course_id.as_str().into(),
            "progress" => self.progress.into(),
            "completedLessons" => self.completed_lessons.clone().into(),
            "enrolledAt" => self.enrolled_at.into(),
            "completedAt" => self.completed_at.into(),
            "status" => self.status.as_str().into(),
            _ => CellValue::Null,
        }
    }

    fn fields(&self) -> Vec<CellValue> {
        ["id", "userId", "courseId", "progress", "completedLessons", "enrolledAt", "completedAt", "status"]
            .iter()
            .map(|k| self.field(k))
            .collect()
    }
}

impl Row for BlogPost {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "title" => self.title.as_str().into(),
            "content" => self.content.as_str().into(),
            "excerpt" => self.excerpt.as_str().into(),
            "author" => self.author.as_str().into(),
            "authorId" => self.author_id.as_str().into(),
            "thumbnail" => self.thumbnail.as_str().into(),
            "category" => self.category.as_str().into(),
            "tags" => self.tags.clone().into(),
            "publishedAt" => self.published_at.into(),
            "updatedAt" => self.updated_at.into(),
            "isPublished" => self.is_published.into(),
            "views" => self.views.into(),
            "likes" => self.likes.into(),
            _ => CellValue::Null,
        }
    }

    fn fields(&self) -> Vec<CellValue> {
        [
            "id",
            "title",
            "content",
            "excerpt",
            "author",
            "authorId",
            "thumbnail",
            "category",
            "tags",
            "publishedAt",
            "updatedAt",
            "isPublished",
            "views",
            "likes",
        ]
        .iter()
        .map(|k| self.field(k))
        .collect()
    }
}

impl Row for Comment {
    fn field(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.as_str().into(),
            "postId" => self.post_id.as_str().into(),
            "userId" => self.user_id.as_str().into(),
            "userName" => self.user_name.as_str().into(),
            "userAvatar" => self.user_avatar.clone().into(),
            "content" => self.content.as_str().into(),
            "parentId" => self.parent_id.clone().into(),
            "createdAt" => self.created_at.into(),
            "updatedAt" => self.updated_at.into(),
            _ => CellValue::Null,
        }
    }

    fn fields(&self) -> Vec<CellValue> {
        ["id", "postId", "userId", "userName", "userAvatar", "content", "parentId", "createdAt", "updatedAt"]
            .iter()
            .map(|k| self.field(k))
            .collect()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    const EPOCH: OffsetDateTime = time::macros::datetime!(2024-01-01 0:00 UTC);

    #[must_use]
    pub fn make_user(id: &str, name: &str, role: Role) -> User {
        User {
            id: id.to_owned(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            name: name.to_owned(),
            role,
            avatar: None,
            bio: None,
            created_at: EPOCH,
        }
    }

    #[must_use]
    pub fn make_course(id: &str, title: &str, category: &str, level: Level, price: f64) -> Course {
        Course {
            id: id.to_owned(),
            title: title.to_owned(),
            description: format!("About {title}"),
            instructor: "Jane Smith".to_owned(),
            instructor_id: "u2".to_owned(),
            price,
            duration: "10 hours".to_owned(),
            level,
            thumbnail: String::new(),
            category: category.to_owned(),
            lessons: Vec::new(),
            enrolled_students: 0,
            rating: 4.5,
            created_at: EPOCH,
            updated_at: EPOCH,
        }
    }

    #[must_use]
    pub fn make_enrollment(id: &str, user_id: &str, course_id: &str, progress: u32) -> Enrollment {
        Enrollment {
            id: id.to_owned(),
            user_id: user_id.to_owned(),
            course_id: course_id.to_owned(),
            progress,
            completed_lessons: Vec::new(),
            enrolled_at: EPOCH,
            completed_at: None,
            status: if progress >= 100 { EnrollmentStatus::Completed } else { EnrollmentStatus::InProgress },
        }
    }

    #[must_use]
    pub fn make_post(id: &str, title: &str, category: &str, views: u32, likes: u32) -> BlogPost {
        BlogPost {
            id: id.to_owned(),
            title: title.to_owned(),
            content: format!("Body of {title}"),
            excerpt: String::new(),
            author: "Jane Smith".to_owned(),
            author_id: "u2".to_owned(),
            thumbnail: String::new(),
            category: category.to_owned(),
            tags: Vec::new(),
            published_at: EPOCH,
            updated_at: EPOCH,
            is_published: true,
            views,
            likes,
        }
    }

    #[must_use]
    pub fn make_comment(id: &str, post_id: &str, parent_id: Option<&str>) -> Comment {
        Comment {
            id: id.to_owned(),
            post_id: post_id.to_owned(),
            user_id: "u3".to_owned(),
            user_name: "Alice Johnson".to_owned(),
            user_avatar: None,
            content: format!("comment {id}"),
            parent_id: parent_id.map(str::to_owned),
            created_at: EPOCH,
            updated_at: EPOCH,
        }
    }
}
