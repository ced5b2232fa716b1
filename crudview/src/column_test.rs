use super::*;

use serde_json::{Value, json};
use time::macros::datetime;

#[test]
fn bool_renders_yes_no_badge() {
    assert_eq!(default_display("published", &CellValue::Bool(true)), CellDisplay::badge("Yes", BadgeTone::Default));
    assert_eq!(default_display("published", &CellValue::Bool(false)).plain(), "No");
}

#[test]
fn date_renders_us_short_date() {
    let value = CellValue::Date(datetime!(2024-01-05 12:00 UTC));
    assert_eq!(default_display("createdAt", &value), CellDisplay::text("1/5/2024"));
}

#[test]
fn price_key_renders_currency() {
    assert_eq!(default_display("price", &CellValue::Number(99.9)).plain(), "$99.90");
    assert_eq!(default_display("coursePrice", &CellValue::Number(0.0)).plain(), "$0.00");
}

#[test]
fn non_price_number_renders_plain() {
    assert_eq!(default_display("views", &CellValue::Number(150.0)).plain(), "150");
}

#[test]
fn list_renders_comma_joined() {
    let tags: CellValue = vec!["react", "hooks"].into();
    assert_eq!(default_display("tags", &tags).plain(), "react, hooks");
}

#[test]
fn null_renders_empty() {
    assert_eq!(default_display("avatar", &CellValue::Null).plain(), "");
}

#[test]
fn column_without_renderer_uses_default() {
    let column: ColumnSchema<Value> = ColumnSchema::new("price", "Price");
    assert_eq!(column.display(&json!({"price": 49.99})).plain(), "$49.99");
}

#[test]
fn column_renderer_overrides_default() {
    let column: ColumnSchema<Value> = ColumnSchema::new("views", "Views").sortable().render(|row: &Value| {
        CellDisplay::text(format!("{} views", row["views"]))
    });
    assert!(column.sortable);
    assert_eq!(column.display(&json!({"views": 3})).plain(), "3 views");
}

#[test]
fn cloned_column_shares_renderer() {
    let column: ColumnSchema<Value> = ColumnSchema::new("a", "A").render(|_| CellDisplay::text("x"));
    let copy = column.clone();
    assert_eq!(copy.display(&json!({})).plain(), "x");
}
