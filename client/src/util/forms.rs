//! Form schemas used by pages, and conversion of submitted values into
//! request bodies.
//!
//! DESIGN
//! ======
//! Schemas are data, so each page's form is one function here and the
//! generic `DynamicForm` renders it. Draft builders run after validation and
//! only normalize (trim, split tags, parse numbers, apply placeholders).

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crudview::{FieldKind, FieldSchema, FormData, FormSchema};

use crate::net::types::{
    BlogPost, Course, CourseDraft, EnrollmentStatus, Level, PostDraft, ProfileUpdate, RegisterRequest, Role, User,
};
use crate::util::catalog::COURSE_CATEGORIES;

pub const EMAIL_PATTERN: &str = r"[^@\s]+@[^@\s]+\.[^@\s]+";

pub const POST_CATEGORIES: [&str; 6] = ["Technology", "Programming", "Design", "Business", "Marketing", "Education"];

const COURSE_THUMBNAIL_PLACEHOLDER: &str = "/placeholder.svg?height=400&width=600&text=Course";
const POST_THUMBNAIL_PLACEHOLDER: &str = "/placeholder.svg?height=400&width=600&text=Blog+Post";

// =============================================================================
// SCHEMAS
// =============================================================================

#[must_use]
pub fn login_form() -> FormSchema {
    FormSchema::new(
        "Sign In",
        "Sign In",
        vec![
            FieldSchema::new("email", "Email", FieldKind::Email)
                .required()
                .placeholder("you@example.com")
                .pattern(EMAIL_PATTERN),
            FieldSchema::new("password", "Password", FieldKind::Password).required(),
        ],
    )
}

#[must_use]
pub fn register_form() -> FormSchema {
    FormSchema::new(
        "Create Account",
        "Create Account",
        vec![
            FieldSchema::new("name", "Full Name", FieldKind::ShortText).required().min(2.0),
            FieldSchema::new("email", "Email", FieldKind::Email)
                .required()
                .placeholder("you@example.com")
                .pattern(EMAIL_PATTERN),
            FieldSchema::new("password", "Password", FieldKind::Password).required().min(6.0),
            FieldSchema::new("role", "I am a", FieldKind::SingleSelect)
                .required()
                .options([("student", "Student"), ("instructor", "Instructor")]),
        ],
    )
}

#[must_use]
pub fn profile_form() -> FormSchema {
    FormSchema::new(
        "Profile",
        "Save Changes",
        vec![
            FieldSchema::new("name", "Full Name", FieldKind::ShortText).required().min(2.0),
            FieldSchema::new("avatar", "Avatar URL", FieldKind::ShortText).placeholder("https://example.com/me.jpg"),
            FieldSchema::new("bio", "Bio", FieldKind::LongText).max(500.0).placeholder("Tell us about yourself"),
        ],
    )
}

#[must_use]
pub fn course_form() -> FormSchema {
    FormSchema::new(
        "Create New Course",
        "Create Course",
        vec![
            FieldSchema::new("title", "Course Title", FieldKind::ShortText)
                .required()
                .placeholder("Enter course title")
                .min(5.0)
                .max(200.0)
                .message("Title must be between 5 and 200 characters"),
            FieldSchema::new("description", "Description", FieldKind::LongText)
                .required()
                .placeholder("Describe what students will learn")
                .min(50.0)
                .max(1000.0)
                .message("Description must be between 50 and 1000 characters"),
            FieldSchema::new("category", "Category", FieldKind::SingleSelect)
                .required()
                .options(COURSE_CATEGORIES.map(|c| (c, c))),
            FieldSchema::new("level", "Level", FieldKind::SingleSelect)
                .required()
                .options(Level::ALL.map(|l| (l.as_str(), l.label()))),
            FieldSchema::new("price", "Price ($)", FieldKind::Numeric)
                .required()
                .placeholder("99.99")
                .min(0.0)
                .message("Price must be a positive number"),
            FieldSchema::new("duration", "Duration", FieldKind::ShortText).required().placeholder("8 weeks"),
            FieldSchema::new("thumbnail", "Thumbnail URL", FieldKind::ShortText)
                .placeholder("https://example.com/image.jpg"),
        ],
    )
}

#[must_use]
pub fn post_form() -> FormSchema {
    FormSchema::new(
        "Create New Post",
        "Create Post",
        vec![
            FieldSchema::new("title", "Title", FieldKind::ShortText)
                .required()
                .placeholder("Enter post title")
                .min(5.0)
                .max(200.0)
                .message("Title must be between 5 and 200 characters"),
            FieldSchema::new("excerpt", "Excerpt", FieldKind::LongText)
                .required()
                .placeholder("Brief description of the post")
                .min(20.0)
                .max(500.0)
                .message("Excerpt must be between 20 and 500 characters"),
            FieldSchema::new("content", "Content", FieldKind::LongText)
                .required()
                .placeholder("Write your blog post content here...")
                .min(100.0)
                .message("Content must be at least 100 characters"),
            FieldSchema::new("category", "Category", FieldKind::SingleSelect)
                .required()
                .options(POST_CATEGORIES.map(|c| (c, c))),
            FieldSchema::new("tags", "Tags (comma-separated)", FieldKind::ShortText)
                .required()
                .placeholder("react, javascript, tutorial"),
            FieldSchema::new("thumbnail", "Thumbnail URL", FieldKind::ShortText)
                .placeholder("https://example.com/image.jpg"),
            FieldSchema::new("isPublished", "Publish immediately", FieldKind::Checkbox),
        ],
    )
}

// =============================================================================
// DRAFTS
// =============================================================================

/// Course body from a validated course form.
#[must_use]
pub fn course_draft(data: &FormData, instructor: &str) -> CourseDraft {
    CourseDraft {
        title: data.text("title").trim().to_owned(),
        description: data.text("description").trim().to_owned(),
        instructor: instructor.to_owned(),
        price: data.number("price").unwrap_or_default(),
        duration: data.text("duration").trim().to_owned(),
        level: Level::parse(&data.text("level")).unwrap_or_default(),
        category: data.text("category"),
        thumbnail: data.optional_text("thumbnail").unwrap_or_else(|| COURSE_THUMBNAIL_PLACEHOLDER.to_owned()),
    }
}

/// Post body from a validated post form.
#[must_use]
pub fn post_draft(data: &FormData) -> PostDraft {
    PostDraft {
        title: data.text("title").trim().to_owned(),
        excerpt: data.text("excerpt").trim().to_owned(),
        content: data.text("content"),
        category: data.text("category"),
        tags: split_tags(&data.text("tags")),
        thumbnail: data.optional_text("thumbnail").unwrap_or_else(|| POST_THUMBNAIL_PLACEHOLDER.to_owned()),
        is_published: data.flag("isPublished"),
    }
}

/// Comma-separated tags, trimmed, empties dropped.
#[must_use]
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|t| !t.is_empty()).map(str::to_owned).collect()
}

#[must_use]
pub fn register_request(data: &FormData) -> RegisterRequest {
    RegisterRequest {
        name: data.text("name").trim().to_owned(),
        email: data.text("email").trim().to_lowercase(),
        password: data.text("password"),
        role: Role::parse(&data.text("role")).unwrap_or_default(),
    }
}

#[must_use]
pub fn profile_update(data: &FormData) -> ProfileUpdate {
    ProfileUpdate {
        name: data.text("name").trim().to_owned(),
        bio: data.optional_text("bio"),
        avatar: data.optional_text("avatar"),
    }
}

/// Initial values for editing an existing profile.
#[must_use]
pub fn profile_values(user: &User) -> FormData {
    [
        ("name", user.name.clone()),
        ("avatar", user.avatar.clone().unwrap_or_default()),
        ("bio", user.bio.clone().unwrap_or_default()),
    ]
    .into_iter()
    .collect()
}

/// Initial values for editing an existing course.
#[must_use]
pub fn course_values(course: &Course) -> FormData {
    [
        ("title", course.title.clone()),
        ("description", course.description.clone()),
        ("category", course.category.clone()),
        ("level", course.level.as_str().to_owned()),
        ("price", course.price.to_string()),
        ("duration", course.duration.clone()),
        ("thumbnail", course.thumbnail.clone()),
    ]
    .into_iter()
    .collect()
}

/// Initial values for editing an existing post.
#[must_use]
pub fn post_values(post: &BlogPost) -> FormData {
    let mut data: FormData = [
        ("title", post.title.clone()),
        ("excerpt", post.excerpt.clone()),
        ("content", post.content.clone()),
        ("category", post.category.clone()),
        ("tags", post.tags.join(", ")),
        ("thumbnail", post.thumbnail.clone()),
    ]
    .into_iter()
    .collect();
    data.insert("isPublished", post.is_published);
    data
}

/// Parse an admin's progress entry. Values are clamped to 0..=100 and a
/// full score marks the enrollment completed.
#[must_use]
pub fn parse_progress(raw: &str) -> Option<(u32, EnrollmentStatus)> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let progress = value.round().clamp(0.0, 100.0) as u32;
    let status = if progress == 100 { EnrollmentStatus::Completed } else { EnrollmentStatus::InProgress };
    Some((progress, status))
}
