//! Form state machine behind the dynamic form renderer.
//!
//! DESIGN
//! ======
//! `FormState` holds one value per field name plus at most one displayed
//! error per field name. Editing a field stores the value and clears that
//! field's error without re-validating. Submitting validates every field;
//! on success the full value map is handed back and the values are kept
//! (the caller decides what happens next).

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::{FieldKind, FieldSchema};
use crate::validation::validate_all;

/// Label shown on the submit control while the caller's `loading` flag is set.
pub const BUSY_LABEL: &str = "Loading...";

/// Value held by one form field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl FieldValue {
    /// Empty string or unchecked checkbox.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Flag(b) => !b,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Flag(b) => Cow::Owned(b.to_string()),
        }
    }

    #[must_use]
    pub fn as_flag(&self) -> bool {
        match self {
            Self::Flag(b) => *b,
            Self::Text(s) => matches!(s.as_str(), "true" | "on" | "1"),
        }
    }

    /// Empty value appropriate to a field kind.
    #[must_use]
    pub fn empty_for(kind: FieldKind) -> Self {
        if kind == FieldKind::Checkbox { Self::Flag(false) } else { Self::default() }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Submitted values keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, FieldValue>);

impl FormData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Text of a field, or `""` when absent.
    #[must_use]
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(|v| v.as_text().into_owned()).unwrap_or_default()
    }

    /// Trimmed text, `None` when absent or blank.
    #[must_use]
    pub fn optional_text(&self, name: &str) -> Option<String> {
        let text = self.text(name);
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    }

    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).is_some_and(FieldValue::as_flag)
    }

    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(|v| v.as_text().trim().parse().ok())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Editable values and displayed errors for one form instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    values: FormData,
    errors: BTreeMap<String, String>,
}

impl FormState {
    /// Seed values from `initial`, filling unset fields with their empty value.
    #[must_use]
    pub fn new(fields: &[FieldSchema], initial: Option<&FormData>) -> Self {
        let mut values = FormData::new();
        for field in fields {
            let value = initial
                .and_then(|data| data.get(&field.name).cloned())
                .unwrap_or_else(|| FieldValue::empty_for(field.kind));
            values.insert(field.name.clone(), value);
        }
        Self { values, errors: BTreeMap::new() }
    }

    #[must_use]
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    #[must_use]
    pub fn values(&self) -> &FormData {
        &self.values
    }

    #[must_use]
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Store a new value and clear that field's displayed error.
    pub fn set_value(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.values.insert(name, value);
        self.errors.remove(name);
    }

    /// Validate every field.
    ///
    /// # Errors
    ///
    /// Returns the number of failing fields; their messages are stored for display.
    pub fn submit(&mut self, fields: &[FieldSchema]) -> Result<FormData, usize> {
        let errors = validate_all(fields, &self.values);
        if errors.is_empty() {
            self.errors.clear();
            Ok(self.values.clone())
        } else {
            let count = errors.len();
            self.errors = errors;
            Err(count)
        }
    }
}

/// Submit control label: the busy label while `loading`, else `submit_text`.
#[must_use]
pub fn submit_label(submit_text: &str, loading: bool) -> &str {
    if loading { BUSY_LABEL } else { submit_text }
}
