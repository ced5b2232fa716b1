use super::*;

use serde_json::json;

#[test]
fn json_field_resolves_top_level_key() {
    let row = json!({"id": 1, "title": "A", "views": 10});
    assert_eq!(row.field("title"), CellValue::from("A"));
    assert_eq!(row.field("views"), CellValue::Number(10.0));
}

#[test]
fn json_field_resolves_dotted_path() {
    let row = json!({"author": {"name": "Jane"}});
    assert_eq!(row.field("author.name"), CellValue::from("Jane"));
}

#[test]
fn json_field_missing_key_is_null() {
    let row = json!({"id": 1});
    assert!(row.field("nope").is_null());
}

#[test]
fn json_fields_lists_every_property() {
    let row = json!({"id": 1, "title": "A", "published": true});
    assert_eq!(row.fields().len(), 3);
}

#[test]
fn matches_scans_properties_outside_declared_columns() {
    let row = json!({"id": 1, "title": "A", "secret": "Needle"});
    assert!(row.matches("needle"));
    assert!(!row.matches("haystack"));
}
