//! Declarative form field schema.
//!
//! DESIGN
//! ======
//! A form is a title, an ordered list of `FieldSchema`, and a submit label.
//! Schemas are plain data (serde-friendly) so pages can build them in code or
//! load them from JSON. Malformed schemas never panic: `FormSchema::issues`
//! reports problems and renderers degrade (empty option list, later duplicate
//! shadows the earlier value).

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Input kind of a form field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    #[default]
    ShortText,
    Email,
    Password,
    LongText,
    SingleSelect,
    Numeric,
    Checkbox,
    File,
    Date,
}

impl FieldKind {
    /// HTML `type` attribute for kinds rendered as `<input>`.
    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Numeric => "number",
            Self::Checkbox => "checkbox",
            Self::File => "file",
            Self::Date => "date",
            Self::ShortText | Self::LongText | Self::SingleSelect => "text",
        }
    }

    /// Kinds whose `min`/`max` bound the character count.
    #[must_use]
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Numeric | Self::Checkbox)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// Rules checked by the validation engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValidation {
    /// Minimum length for text kinds, minimum value for `Numeric`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Maximum length for text kinds, maximum value for `Numeric`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Regular expression the whole value must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Replaces the default message of any failing check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
}

impl FieldSchema {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self { name: name.into(), label: label.into(), kind, ..Self::default() }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    #[must_use]
    pub fn options<I, V, L>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        self.options = options.into_iter().map(|(v, l)| SelectOption::new(v, l)).collect();
        self
    }

    #[must_use]
    pub fn min(mut self, min: f64) -> Self {
        self.validation.get_or_insert_with(FieldValidation::default).min = Some(min);
        self
    }

    #[must_use]
    pub fn max(mut self, max: f64) -> Self {
        self.validation.get_or_insert_with(FieldValidation::default).max = Some(max);
        self
    }

    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.validation.get_or_insert_with(FieldValidation::default).pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.validation.get_or_insert_with(FieldValidation::default).message = Some(message.into());
        self
    }
}

/// Problems detected in a form schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaIssue {
    #[error("duplicate field name: {0}")]
    DuplicateName(String),
    #[error("select field without options: {0}")]
    SelectWithoutOptions(String),
    #[error("options on non-select field: {0}")]
    OptionsOnNonSelect(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub title: String,
    pub fields: Vec<FieldSchema>,
    pub submit_text: String,
}

impl FormSchema {
    #[must_use]
    pub fn new(title: impl Into<String>, submit_text: impl Into<String>, fields: Vec<FieldSchema>) -> Self {
        Self { title: title.into(), fields, submit_text: submit_text.into() }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Unique names, and `options` present iff the kind is `SingleSelect`.
    #[must_use]
    pub fn issues(&self) -> Vec<SchemaIssue> {
        let mut seen = HashSet::new();
        let mut issues = Vec::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                issues.push(SchemaIssue::DuplicateName(field.name.clone()));
            }
            match (field.kind, field.options.is_empty()) {
                (FieldKind::SingleSelect, true) => issues.push(SchemaIssue::SelectWithoutOptions(field.name.clone())),
                (kind, false) if kind != FieldKind::SingleSelect => {
                    issues.push(SchemaIssue::OptionsOnNonSelect(field.name.clone()));
                }
                _ => {}
            }
        }
        issues
    }
}
