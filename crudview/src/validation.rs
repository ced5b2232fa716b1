//! Field validation engine.
//!
//! DESIGN
//! ======
//! Checks run in a fixed order and the first failure wins:
//! required, then min, then max, then pattern. Min/max/pattern only run when
//! a value is present so an empty optional field never reports "too short".
//! A custom `validation.message` replaces whichever default message fired.
//!
//! ERROR HANDLING
//! ==============
//! An invalid `pattern` is a schema bug, not a user error: it is logged at
//! `warn` and the pattern check is skipped. Patterns compile once per
//! process and are reused across calls.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::{BTreeMap, HashMap};
use std::sync::{LazyLock, Mutex, PoisonError};

use regex::Regex;

use crate::field::{FieldKind, FieldSchema};
use crate::form::{FieldValue, FormData};
use crate::value::format_number;

/// Compiled custom patterns keyed by their anchored source. Invalid patterns
/// are cached as `None` so they warn once.
static PATTERNS: LazyLock<Mutex<HashMap<String, Option<Regex>>>> = LazyLock::new(|| Mutex::new(HashMap::new()));

fn anchor(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}

fn compiled(field: &str, pattern: &str) -> Option<Regex> {
    let source = anchor(pattern);
    let mut cache = PATTERNS.lock().unwrap_or_else(PoisonError::into_inner);
    cache
        .entry(source)
        .or_insert_with_key(|source| match Regex::new(source) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(%field, error = %e, "invalid validation pattern; skipped");
                None
            }
        })
        .clone()
}

/// Validate one field value. Returns the message to display, or `None`.
#[must_use]
pub fn validate(field: &FieldSchema, value: Option<&FieldValue>) -> Option<String> {
    let failure = check(field, value)?;
    let custom = field.validation.as_ref().and_then(|v| v.message.clone());
    Some(custom.unwrap_or(failure))
}

/// Validate every field of a form. Keys are field names.
#[must_use]
pub fn validate_all(fields: &[FieldSchema], data: &FormData) -> BTreeMap<String, String> {
    fields
        .iter()
        .filter_map(|field| validate(field, data.get(&field.name)).map(|msg| (field.name.clone(), msg)))
        .collect()
}

fn check(field: &FieldSchema, value: Option<&FieldValue>) -> Option<String> {
    let label = &field.label;
    let present = value.filter(|v| !v.is_empty());

    let Some(value) = present else {
        return field.required.then(|| format!("{label} is required"));
    };
    let Some(rules) = &field.validation else {
        return None;
    };
    let text = value.as_text();

    if field.kind == FieldKind::Numeric {
        let Ok(number) = text.trim().parse::<f64>() else {
            return Some(format!("{label} format is invalid"));
        };
        if let Some(min) = rules.min.filter(|min| number < *min) {
            return Some(format!("{label} must be at least {}", format_number(min)));
        }
        if let Some(max) = rules.max.filter(|max| number > *max) {
            return Some(format!("{label} must be no more than {}", format_number(max)));
        }
    } else if field.kind.is_text() {
        #[allow(clippy::cast_precision_loss)]
        let len = text.chars().count() as f64;
        if let Some(min) = rules.min.filter(|min| len < *min) {
            return Some(format!("{label} must be at least {} characters", format_number(min)));
        }
        if let Some(max) = rules.max.filter(|max| len > *max) {
            return Some(format!("{label} must be no more than {} characters", format_number(max)));
        }
    }

    if let Some(re) = rules.pattern.as_deref().and_then(|pattern| compiled(&field.name, pattern)) {
        if !re.is_match(&text) {
            return Some(format!("{label} format is invalid"));
        }
    }

    None
}
