use super::*;

use time::macros::datetime;

// =============================================================================
// search_text
// =============================================================================

#[test]
fn search_text_prints_integral_numbers_without_fraction() {
    assert_eq!(CellValue::Number(30.0).search_text(), "30");
    assert_eq!(CellValue::Number(99.99).search_text(), "99.99");
}

#[test]
fn search_text_of_null_is_empty() {
    assert_eq!(CellValue::Null.search_text(), "");
}

#[test]
fn search_text_of_date_is_rfc3339() {
    let value = CellValue::Date(datetime!(2024-01-15 10:00 UTC));
    assert_eq!(value.search_text(), "2024-01-15T10:00:00Z");
}

#[test]
fn contains_lowercase_matches_any_list_item() {
    let tags: CellValue = vec!["React", "JavaScript"].into();
    assert!(tags.contains_lowercase("javascript"));
    assert!(!tags.contains_lowercase("rust"));
}

#[test]
fn contains_lowercase_ignores_case_of_value() {
    assert!(CellValue::from("Hello World").contains_lowercase("world"));
}

// =============================================================================
// natural_cmp
// =============================================================================

#[test]
fn numbers_compare_numerically() {
    assert_eq!(CellValue::from(9).natural_cmp(&CellValue::from(10)), Ordering::Less);
}

#[test]
fn text_compares_lexicographically() {
    assert_eq!(CellValue::from("b").natural_cmp(&CellValue::from("a")), Ordering::Greater);
}

#[test]
fn dates_compare_chronologically() {
    let early = CellValue::Date(datetime!(2023-01-01 0:00 UTC));
    let late = CellValue::Date(datetime!(2024-01-01 0:00 UTC));
    assert_eq!(early.natural_cmp(&late), Ordering::Less);
}

#[test]
fn mixed_kinds_compare_equal() {
    assert_eq!(CellValue::from(1).natural_cmp(&CellValue::from("1")), Ordering::Equal);
    assert_eq!(CellValue::Null.natural_cmp(&CellValue::from(true)), Ordering::Equal);
}

#[test]
fn option_none_becomes_null() {
    let v: CellValue = Option::<String>::None.into();
    assert!(v.is_null());
}
