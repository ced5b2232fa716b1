use super::*;

use time::macros::datetime;

use crate::services::user::Role;

fn user(role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        email: "jane@example.com".to_owned(),
        name: "Jane Smith".to_owned(),
        role,
        avatar: None,
        bio: None,
        created_at: datetime!(2024-01-01 0:00 UTC),
    }
}

fn post(author_id: Uuid, is_published: bool) -> BlogPost {
    BlogPost {
        id: Uuid::new_v4(),
        title: "Getting Started with React Hooks".to_owned(),
        content: "Hooks let you use state.".to_owned(),
        excerpt: "Learn hooks".to_owned(),
        author: "Jane Smith".to_owned(),
        author_id,
        thumbnail: String::new(),
        category: "Programming".to_owned(),
        tags: vec!["react".to_owned()],
        published_at: datetime!(2024-03-01 0:00 UTC),
        updated_at: datetime!(2024-03-01 0:00 UTC),
        is_published,
        views: 1500,
        likes: 89,
    }
}

fn tags(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|t| (*t).to_owned()).collect()
}

// =============================================================================
// SortOrder
// =============================================================================

#[test]
fn sort_order_parses_known_values() {
    assert_eq!(SortOrder::parse(Some("oldest")), SortOrder::Oldest);
    assert_eq!(SortOrder::parse(Some("views")), SortOrder::Views);
    assert_eq!(SortOrder::parse(Some("popular")), SortOrder::Views);
    assert_eq!(SortOrder::parse(Some("likes")), SortOrder::Likes);
}

#[test]
fn sort_order_defaults_to_newest() {
    assert_eq!(SortOrder::parse(None), SortOrder::Newest);
    assert_eq!(SortOrder::parse(Some("random; DROP TABLE")), SortOrder::Newest);
}

#[test]
fn order_clause_sorts_views_descending() {
    assert!(SortOrder::Views.order_clause().starts_with("views DESC"));
    assert!(SortOrder::Oldest.order_clause().starts_with("published_at ASC"));
}

// =============================================================================
// Visibility
// =============================================================================

#[test]
fn published_posts_are_public() {
    assert!(post(Uuid::new_v4(), true).visible_to(None));
}

#[test]
fn drafts_are_hidden_from_anonymous_and_other_users() {
    let draft = post(Uuid::new_v4(), false);
    assert!(!draft.visible_to(None));
    assert!(!draft.visible_to(Some(&user(Role::Instructor))));
}

#[test]
fn drafts_are_visible_to_author_and_admin() {
    let author = user(Role::Instructor);
    let draft = post(author.id, false);
    assert!(draft.visible_to(Some(&author)));
    assert!(draft.visible_to(Some(&user(Role::Admin))));
}

#[test]
fn published_filter_only_for_literal_true() {
    let filter = PostFilter { published: Some("true".to_owned()), ..PostFilter::default() };
    assert!(filter.published_only());
    let filter = PostFilter { published: Some("yes".to_owned()), ..PostFilter::default() };
    assert!(!filter.published_only());
}

// =============================================================================
// Input
// =============================================================================

#[test]
fn clean_tags_trims_and_dedupes() {
    assert_eq!(clean_tags(&tags(&[" react", "hooks ", "", "react"])), ["react", "hooks"]);
}

#[test]
fn validate_input_lists_blank_fields() {
    let input = PostInput {
        title: "Title".to_owned(),
        content: String::new(),
        excerpt: " ".to_owned(),
        author: None,
        thumbnail: None,
        category: "Programming".to_owned(),
        tags: Vec::new(),
        is_published: false,
    };
    let fields: Vec<_> = validate_input(&input).unwrap_err().into_iter().map(|e| e.field).collect();
    assert_eq!(fields, ["content", "excerpt"]);
}

#[test]
fn validate_patch_ignores_absent_fields() {
    assert!(validate_patch(&PostPatch { is_published: Some(true), ..PostPatch::default() }).is_ok());
    assert!(validate_patch(&PostPatch { title: Some(String::new()), ..PostPatch::default() }).is_err());
}
