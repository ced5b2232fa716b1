use super::*;

#[test]
fn builder_collects_validation_rules() {
    let field = FieldSchema::new("title", "Title", FieldKind::ShortText)
        .required()
        .min(5.0)
        .max(200.0)
        .message("Title must be between 5 and 200 characters");
    assert!(field.required);
    let rules = field.validation.expect("validation set");
    assert_eq!(rules.min, Some(5.0));
    assert_eq!(rules.max, Some(200.0));
    assert_eq!(rules.message.as_deref(), Some("Title must be between 5 and 200 characters"));
}

#[test]
fn options_keep_list_order() {
    let field = FieldSchema::new("level", "Level", FieldKind::SingleSelect)
        .options([("beginner", "Beginner"), ("intermediate", "Intermediate"), ("advanced", "Advanced")]);
    let values: Vec<_> = field.options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, ["beginner", "intermediate", "advanced"]);
}

#[test]
fn input_type_matches_kind() {
    assert_eq!(FieldKind::Email.input_type(), "email");
    assert_eq!(FieldKind::Numeric.input_type(), "number");
    assert_eq!(FieldKind::ShortText.input_type(), "text");
}

#[test]
fn numeric_and_checkbox_are_not_text() {
    assert!(!FieldKind::Numeric.is_text());
    assert!(!FieldKind::Checkbox.is_text());
    assert!(FieldKind::LongText.is_text());
}

// =============================================================================
// issues
// =============================================================================

#[test]
fn well_formed_schema_has_no_issues() {
    let schema = FormSchema::new(
        "Create Course",
        "Create Course",
        vec![
            FieldSchema::new("title", "Title", FieldKind::ShortText).required(),
            FieldSchema::new("level", "Level", FieldKind::SingleSelect).options([("beginner", "Beginner")]),
        ],
    );
    assert!(schema.issues().is_empty());
}

#[test]
fn duplicate_names_are_reported() {
    let schema = FormSchema::new(
        "Form",
        "Save",
        vec![
            FieldSchema::new("title", "Title", FieldKind::ShortText),
            FieldSchema::new("title", "Other", FieldKind::LongText),
        ],
    );
    assert_eq!(schema.issues(), vec![SchemaIssue::DuplicateName("title".into())]);
}

#[test]
fn select_without_options_is_reported() {
    let schema = FormSchema::new("Form", "Save", vec![FieldSchema::new("level", "Level", FieldKind::SingleSelect)]);
    assert_eq!(schema.issues(), vec![SchemaIssue::SelectWithoutOptions("level".into())]);
}

#[test]
fn options_on_text_field_are_reported() {
    let schema = FormSchema::new(
        "Form",
        "Save",
        vec![FieldSchema::new("title", "Title", FieldKind::ShortText).options([("a", "A")])],
    );
    assert_eq!(schema.issues(), vec![SchemaIssue::OptionsOnNonSelect("title".into())]);
}

#[test]
fn schema_deserializes_from_json_config() {
    let schema: FormSchema = serde_json::from_str(
        r#"{
            "title": "Register",
            "submitText": "Create Account",
            "fields": [
                {"name": "email", "label": "Email", "kind": "email", "required": true,
                 "validation": {"pattern": "[^@\\s]+@[^@\\s]+\\.[^@\\s]+"}}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(schema.submit_text, "Create Account");
    assert_eq!(schema.fields[0].kind, FieldKind::Email);
    assert!(schema.fields[0].validation.as_ref().unwrap().pattern.is_some());
}
