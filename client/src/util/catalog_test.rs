use super::*;

use time::macros::datetime;

use crate::net::types::test_helpers::{make_course, make_post};

fn courses() -> Vec<Course> {
    vec![
        make_course("c1", "Complete React Developer Course", "Web Development", Level::Intermediate, 99.99),
        make_course("c2", "Python for Data Science", "Data Science", Level::Beginner, 79.99),
        make_course("c3", "Enterprise Architecture", "Programming", Level::Advanced, 650.0),
    ]
}

fn course_ids(items: &[&Course]) -> Vec<String> {
    items.iter().map(|c| c.id.clone()).collect()
}

fn post_ids(items: &[&BlogPost]) -> Vec<String> {
    items.iter().map(|p| p.id.clone()).collect()
}

// =============================================================
// Course filters
// =============================================================

#[test]
fn default_filters_respect_price_ceiling() {
    let all = courses();
    let visible = CourseFilters::default().apply(&all);
    assert_eq!(course_ids(&visible), ["c1", "c2"]);
}

#[test]
fn search_matches_title_case_insensitively() {
    let all = courses();
    let filters = CourseFilters { search: "PYTHON".into(), ..CourseFilters::default() };
    assert_eq!(course_ids(&filters.apply(&all)), ["c2"]);
}

#[test]
fn search_matches_instructor() {
    let all = courses();
    let filters = CourseFilters { search: "jane".into(), price_range: (0.0, 1000.0), ..CourseFilters::default() };
    assert_eq!(filters.apply(&all).len(), 3);
}

#[test]
fn category_and_level_combine() {
    let all = courses();
    let filters = CourseFilters {
        category: Some("Web Development".into()),
        level: Some(Level::Beginner),
        ..CourseFilters::default()
    };
    assert!(filters.apply(&all).is_empty());
    let filters = CourseFilters { level: Some(Level::Intermediate), ..filters };
    assert_eq!(course_ids(&filters.apply(&all)), ["c1"]);
}

#[test]
fn price_bounds_are_inclusive() {
    let all = courses();
    let filters = CourseFilters { price_range: (79.99, 99.99), ..CourseFilters::default() };
    assert_eq!(filters.apply(&all).len(), 2);
}

#[test]
fn course_count_label_pluralizes() {
    assert_eq!(course_count_label(1), "1 course found");
    assert_eq!(course_count_label(0), "0 courses found");
}

// =============================================================
// Post filters
// =============================================================

fn posts() -> Vec<BlogPost> {
    let mut a = make_post("p1", "Getting Started with React Hooks", "React", 1250, 89);
    a.tags = vec!["hooks".into()];
    a.published_at = datetime!(2024-01-15 0:00 UTC);
    let mut b = make_post("p2", "Node.js Performance Tips", "Node.js", 890, 120);
    b.published_at = datetime!(2024-02-01 0:00 UTC);
    let mut draft = make_post("p3", "Unpublished Draft", "React", 5000, 0);
    draft.is_published = false;
    vec![a, b, draft]
}

#[test]
fn drafts_are_hidden() {
    let all = posts();
    let visible = PostFilters::default().apply(&all);
    assert_eq!(post_ids(&visible), ["p2", "p1"]);
}

#[test]
fn sort_orders_follow_selection() {
    let all = posts();
    let order = |sort| post_ids(&PostFilters { sort, ..PostFilters::default() }.apply(&all));
    assert_eq!(order(PostSort::Oldest), ["p1", "p2"]);
    assert_eq!(order(PostSort::Popular), ["p1", "p2"]);
    assert_eq!(order(PostSort::Liked), ["p2", "p1"]);
}

#[test]
fn post_search_covers_tags() {
    let all = posts();
    let filters = PostFilters { search: "HOOKS".into(), ..PostFilters::default() };
    assert_eq!(post_ids(&filters.apply(&all)), ["p1"]);
}

#[test]
fn post_categories_skip_drafts_and_duplicates() {
    assert_eq!(post_categories(&posts()), ["React", "Node.js"]);
}

#[test]
fn featured_post_is_most_viewed_published() {
    let all = posts();
    assert_eq!(featured_post(&all).map(|p| p.id.as_str()), Some("p1"));
    assert!(featured_post(&[]).is_none());
}

#[test]
fn post_sort_parse_defaults_to_newest() {
    assert_eq!(PostSort::parse("liked"), PostSort::Liked);
    assert_eq!(PostSort::parse("bogus"), PostSort::Newest);
}

#[test]
fn related_posts_share_category_and_skip_self_and_drafts() {
    let mut all = posts();
    all.push(make_post("p4", "Context vs Redux", "React", 10, 1));
    let related = related_posts(&all, &all[0], 3);
    assert_eq!(post_ids(&related), ["p4"]);
}
