//! Field-level request validation shared by the services.
//!
//! Failures are collected, not short-circuited, so a response can list every
//! invalid field at once as `details: [{field, message}]`.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static EMAIL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[must_use]
pub fn is_email(raw: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(raw))
}

/// Length in characters, not bytes.
#[must_use]
pub fn char_len(raw: &str) -> usize {
    raw.chars().count()
}

/// Accumulates failed checks.
#[derive(Debug, Default)]
pub struct Checks(Vec<FieldError>);

impl Checks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `field` unless `ok`.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) -> &mut Self {
        if !ok {
            self.0.push(FieldError { field: field.to_owned(), message: message.to_owned() });
        }
        self
    }

    /// Shorthand for a trimmed non-empty string.
    pub fn required(&mut self, value: &str, field: &str, message: &str) -> &mut Self {
        self.check(!value.trim().is_empty(), field, message)
    }

    /// # Errors
    ///
    /// Returns every recorded failure.
    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.0.is_empty() { Ok(()) } else { Err(self.0) }
    }
}

/// Escape `%`, `_` and `\` and wrap in wildcards for an `ILIKE` substring match.
#[must_use]
pub fn like_pattern(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len() + 2);
    out.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

/// Trimmed non-empty value, treating blank filters as absent.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}
