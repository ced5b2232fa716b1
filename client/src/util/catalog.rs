//! Course catalog and blog listing filters.
//!
//! DESIGN
//! ======
//! Filters are plain values held in page signals; `apply` borrows the store
//! slice and returns matching records in display order. "All" selections are
//! `None` rather than sentinel strings.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::cmp::Reverse;

use crate::net::types::{BlogPost, Course, Level};

/// Course categories offered in the filter dropdown.
pub const COURSE_CATEGORIES: [&str; 6] =
    ["Web Development", "Programming", "Data Science", "Design", "Business", "Marketing"];

pub const DEFAULT_PRICE_RANGE: (f64, f64) = (0.0, 500.0);

// =============================================================================
// COURSES
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct CourseFilters {
    pub search: String,
    pub category: Option<String>,
    pub level: Option<Level>,
    /// Inclusive bounds.
    pub price_range: (f64, f64),
}

impl Default for CourseFilters {
    fn default() -> Self {
        Self { search: String::new(), category: None, level: None, price_range: DEFAULT_PRICE_RANGE }
    }
}

impl CourseFilters {
    /// Search covers title, instructor and description.
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || [&course.title, &course.instructor, &course.description]
                .iter()
                .any(|text| text.to_lowercase().contains(&needle));
        let matches_category = self.category.as_ref().is_none_or(|c| *c == course.category);
        let matches_level = self.level.is_none_or(|l| l == course.level);
        let (low, high) = self.price_range;
        matches_search && matches_category && matches_level && course.price >= low && course.price <= high
    }

    #[must_use]
    pub fn apply<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        courses.iter().filter(|c| self.matches(c)).collect()
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// "1 course found" / "3 courses found"
#[must_use]
pub fn course_count_label(n: usize) -> String {
    format!("{n} course{} found", if n == 1 { "" } else { "s" })
}

// =============================================================================
// BLOG
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PostSort {
    #[default]
    Newest,
    Oldest,
    Popular,
    Liked,
}

impl PostSort {
    pub const ALL: [Self; 4] = [Self::Newest, Self::Oldest, Self::Popular, Self::Liked];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Popular => "popular",
            Self::Liked => "liked",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::Popular => "Most Popular",
            Self::Liked => "Most Liked",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.as_str() == raw).unwrap_or_default()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostFilters {
    pub search: String,
    pub category: Option<String>,
    pub sort: PostSort,
}

impl PostFilters {
    /// Search covers title, content, author and tags.
    #[must_use]
    pub fn matches(&self, post: &BlogPost) -> bool {
        let needle = self.search.trim().to_lowercase();
        let matches_search = needle.is_empty()
            || [&post.title, &post.content, &post.author]
                .iter()
                .any(|text| text.to_lowercase().contains(&needle))
            || post.tags.iter().any(|tag| tag.to_lowercase().contains(&needle));
        matches_search && self.category.as_ref().is_none_or(|c| *c == post.category)
    }

    /// Published posts that match, in the selected order.
    #[must_use]
    pub fn apply<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        let mut visible: Vec<&BlogPost> = published(posts).filter(|p| self.matches(p)).collect();
        match self.sort {
            PostSort::Newest => visible.sort_by_key(|p| Reverse(p.published_at)),
            PostSort::Oldest => visible.sort_by_key(|p| p.published_at),
            PostSort::Popular => visible.sort_by_key(|p| Reverse(p.views)),
            PostSort::Liked => visible.sort_by_key(|p| Reverse(p.likes)),
        }
        visible
    }
}

pub fn published(posts: &[BlogPost]) -> impl Iterator<Item = &BlogPost> {
    posts.iter().filter(|p| p.is_published)
}

/// Distinct categories of published posts, in first-seen order.
#[must_use]
pub fn post_categories(posts: &[BlogPost]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for post in published(posts) {
        if !seen.contains(&post.category) {
            seen.push(post.category.clone());
        }
    }
    seen
}

/// Most viewed published post; on a tie the later post wins.
#[must_use]
pub fn featured_post(posts: &[BlogPost]) -> Option<&BlogPost> {
    published(posts).max_by_key(|p| p.views)
}

/// Other published posts in the same category, in list order.
#[must_use]
pub fn related_posts<'a>(posts: &'a [BlogPost], post: &BlogPost, limit: usize) -> Vec<&'a BlogPost> {
    published(posts).filter(|p| p.id != post.id && p.category == post.category).take(limit).collect()
}
