use super::*;

fn text(s: &str) -> FieldValue {
    FieldValue::from(s)
}

fn title_field() -> FieldSchema {
    FieldSchema::new("title", "Title", FieldKind::ShortText).required().min(5.0).max(200.0)
}

// =============================================================================
// required
// =============================================================================

#[test]
fn required_empty_value_fails() {
    let field = FieldSchema::new("name", "Full Name", FieldKind::ShortText).required();
    assert_eq!(validate(&field, Some(&text(""))), Some("Full Name is required".to_owned()));
}

#[test]
fn required_absent_value_fails() {
    let field = FieldSchema::new("name", "Full Name", FieldKind::ShortText).required();
    assert_eq!(validate(&field, None), Some("Full Name is required".to_owned()));
}

#[test]
fn required_unchecked_checkbox_fails() {
    let field = FieldSchema::new("terms", "Terms", FieldKind::Checkbox).required();
    assert!(validate(&field, Some(&FieldValue::Flag(false))).is_some());
    assert!(validate(&field, Some(&FieldValue::Flag(true))).is_none());
}

#[test]
fn optional_empty_value_skips_length_checks() {
    let field = FieldSchema::new("bio", "Bio", FieldKind::LongText).min(10.0);
    assert_eq!(validate(&field, Some(&text(""))), None);
}

// =============================================================================
// min / max
// =============================================================================

#[test]
fn value_shorter_than_min_fails() {
    assert_eq!(
        validate(&title_field(), Some(&text("Hi"))),
        Some("Title must be at least 5 characters".to_owned())
    );
}

#[test]
fn value_exactly_min_passes() {
    assert_eq!(validate(&title_field(), Some(&text("Hello"))), None);
}

#[test]
fn value_longer_than_max_fails() {
    let long = "x".repeat(201);
    assert_eq!(
        validate(&title_field(), Some(&text(&long))),
        Some("Title must be no more than 200 characters".to_owned())
    );
}

#[test]
fn length_counts_characters_not_bytes() {
    let field = FieldSchema::new("name", "Name", FieldKind::ShortText).max(3.0);
    assert_eq!(validate(&field, Some(&text("été"))), None);
}

#[test]
fn numeric_bounds_compare_value() {
    let field = FieldSchema::new("price", "Price", FieldKind::Numeric).min(0.0).max(1000.0);
    assert_eq!(validate(&field, Some(&text("99.99"))), None);
    assert_eq!(validate(&field, Some(&text("-1"))), Some("Price must be at least 0".to_owned()));
    assert_eq!(validate(&field, Some(&text("1500"))), Some("Price must be no more than 1000".to_owned()));
}

#[test]
fn numeric_unparsable_is_format_error() {
    let field = FieldSchema::new("price", "Price", FieldKind::Numeric);
    assert_eq!(validate(&field, Some(&text("abc"))), None, "no rules means no checks");
    let field = field.min(0.0);
    assert_eq!(validate(&field, Some(&text("abc"))), Some("Price format is invalid".to_owned()));
}

// =============================================================================
// pattern
// =============================================================================

#[test]
fn pattern_must_match_whole_value() {
    let field = FieldSchema::new("code", "Code", FieldKind::ShortText).pattern("[A-Z]{3}");
    assert_eq!(validate(&field, Some(&text("ABC"))), None);
    assert_eq!(validate(&field, Some(&text("xABCx"))), Some("Code format is invalid".to_owned()));
}

#[test]
fn invalid_pattern_is_skipped() {
    let field = FieldSchema::new("code", "Code", FieldKind::ShortText).pattern("([");
    assert_eq!(validate(&field, Some(&text("anything"))), None);
}

#[test]
fn pattern_compiles_once_and_is_reused() {
    let field = FieldSchema::new("sku", "SKU", FieldKind::ShortText).pattern("SKU-[0-9]{4}");
    assert_eq!(validate(&field, Some(&text("SKU-0001"))), None);
    let first = PATTERNS.lock().unwrap().get(&anchor("SKU-[0-9]{4}")).cloned().flatten();
    assert_eq!(validate(&field, Some(&text("sku-1"))), Some("SKU format is invalid".to_owned()));
    let cache = PATTERNS.lock().unwrap();
    assert_eq!(cache.keys().filter(|k| k.contains("SKU-")).count(), 1);
    assert_eq!(first.map(|re| re.as_str().to_owned()), Some("^(?:SKU-[0-9]{4})$".to_owned()));
}

#[test]
fn invalid_pattern_is_remembered_as_unusable() {
    let field = FieldSchema::new("tag", "Tag", FieldKind::ShortText).pattern("(unclosed");
    assert_eq!(validate(&field, Some(&text("x"))), None);
    assert!(PATTERNS.lock().unwrap().get(&anchor("(unclosed")).is_some_and(Option::is_none));
}

// =============================================================================
// custom message
// =============================================================================

#[test]
fn custom_message_overrides_length_failure() {
    let field = title_field().message("Title must be between 5 and 200 characters");
    assert_eq!(
        validate(&field, Some(&text("Hi"))),
        Some("Title must be between 5 and 200 characters".to_owned())
    );
}

#[test]
fn custom_message_overrides_required_failure() {
    let field = title_field().message("Please enter a title");
    assert_eq!(validate(&field, None), Some("Please enter a title".to_owned()));
}

#[test]
fn first_failing_check_wins() {
    let field = FieldSchema::new("code", "Code", FieldKind::ShortText).min(5.0).pattern("[0-9]+");
    assert_eq!(validate(&field, Some(&text("ab"))), Some("Code must be at least 5 characters".to_owned()));
}

// =============================================================================
// validate_all
// =============================================================================

#[test]
fn validate_all_reports_each_failing_field() {
    let fields = vec![
        title_field(),
        FieldSchema::new("category", "Category", FieldKind::ShortText).required(),
        FieldSchema::new("excerpt", "Excerpt", FieldKind::LongText),
    ];
    let data: FormData = [("title", "Hi"), ("category", ""), ("excerpt", "")].into_iter().collect();
    let errors = validate_all(&fields, &data);
    assert_eq!(errors.len(), 2);
    assert!(errors.contains_key("title"));
    assert!(errors.contains_key("category"));
}
