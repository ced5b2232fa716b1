use super::*;

fn input() -> CourseInput {
    CourseInput {
        title: "Complete React Development".to_owned(),
        description: "Learn React from basics to advanced concepts.".to_owned(),
        instructor: None,
        price: 99.99,
        duration: "12 weeks".to_owned(),
        level: Level::Intermediate,
        thumbnail: None,
        category: "Web Development".to_owned(),
        lessons: Vec::new(),
    }
}

fn lesson(title: &str, duration: i32) -> LessonInput {
    LessonInput {
        title: title.to_owned(),
        description: String::new(),
        video_url: None,
        content: String::new(),
        duration,
        order: 0,
    }
}

fn fields(errors: &[FieldError]) -> Vec<&str> {
    errors.iter().map(|e| e.field.as_str()).collect()
}

// =============================================================================
// Filter normalization
// =============================================================================

#[test]
fn all_sentinels_are_dropped() {
    let filter = CourseFilter {
        category: Some("All Categories".to_owned()),
        level: Some("All Levels".to_owned()),
        search: Some("   ".to_owned()),
    }
    .normalized();
    assert!(filter.category.is_none());
    assert!(filter.level.is_none());
    assert!(filter.search.is_none());
}

#[test]
fn real_filter_values_are_kept_trimmed() {
    let filter = CourseFilter {
        category: Some("Programming".to_owned()),
        level: Some("advanced".to_owned()),
        search: Some(" react ".to_owned()),
    }
    .normalized();
    assert_eq!(filter.category.as_deref(), Some("Programming"));
    assert_eq!(filter.level.as_deref(), Some("advanced"));
    assert_eq!(filter.search.as_deref(), Some("react"));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn valid_input_passes() {
    let mut course = input();
    course.lessons = vec![lesson("Introduction to React", 45)];
    assert!(validate_input(&course).is_ok());
}

#[test]
fn blank_required_fields_and_negative_price_fail() {
    let mut course = input();
    course.title = "  ".to_owned();
    course.category = String::new();
    course.price = -1.0;
    let errors = validate_input(&course).unwrap_err();
    assert_eq!(fields(&errors), ["title", "category", "price"]);
}

#[test]
fn non_finite_price_fails() {
    let mut course = input();
    course.price = f64::NAN;
    assert_eq!(fields(&validate_input(&course).unwrap_err()), ["price"]);
}

#[test]
fn lesson_without_title_fails() {
    let mut course = input();
    course.lessons = vec![lesson("", 10), lesson("Hooks", -5)];
    let errors = validate_input(&course).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.field == "lessons"));
}

#[test]
fn empty_patch_is_valid() {
    assert!(validate_patch(&CoursePatch::default()).is_ok());
}

#[test]
fn patch_checks_only_present_fields() {
    let patch = CoursePatch { title: Some(String::new()), price: Some(10.0), ..CoursePatch::default() };
    assert_eq!(fields(&validate_patch(&patch).unwrap_err()), ["title"]);
}

#[test]
fn level_round_trips_through_str() {
    for level in [Level::Beginner, Level::Intermediate, Level::Advanced] {
        assert_eq!(Level::parse(level.as_str()), Some(level));
    }
    assert_eq!(Level::parse("expert"), None);
}
