//! Cell values read out of table rows.
//!
//! DESIGN
//! ======
//! Rows are opaque to the table engine. Each property is projected into a
//! `CellValue` so search (string form) and sort (natural ordering) work the
//! same way for every domain entity.

#[cfg(test)]
#[path = "value_test.rs"]
mod value_test;

use std::cmp::Ordering;

use time::OffsetDateTime;

/// One property value of a row.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(OffsetDateTime),
    List(Vec<CellValue>),
}

impl CellValue {
    /// String form used for free-text search.
    ///
    /// Dates use RFC 3339 so a query like `2024-01` hits every row from that month.
    #[must_use]
    pub fn search_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::Text(s) => s.clone(),
            Self::Date(d) => d
                .format(&time::format_description::well_known::Rfc3339)
                .unwrap_or_default(),
            Self::List(items) => items.iter().map(Self::search_text).collect::<Vec<_>>().join(" "),
        }
    }

    /// Case-insensitive substring test against the search form.
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self {
            Self::List(items) => items.iter().any(|item| item.contains_lowercase(needle)),
            other => other.search_text().to_lowercase().contains(needle),
        }
    }

    /// Natural ordering: numbers numerically, text lexicographically, dates
    /// chronologically, bools `false < true`. Values of different kinds (and
    /// nulls) compare equal so a stable sort leaves them in input order.
    #[must_use]
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::List(a), Self::List(b)) => a.len().cmp(&b.len()),
            _ => Ordering::Equal,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Integral floats print without a trailing `.0`.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = n as i64;
        whole.to_string()
    } else {
        n.to_string()
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<OffsetDateTime> for CellValue {
    fn from(value: OffsetDateTime) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<CellValue>> From<Vec<T>> for CellValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}
