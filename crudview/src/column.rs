//! Table column schema and cell display.
//!
//! DESIGN
//! ======
//! A column names a row key and optionally carries a renderer closure. The
//! caller supplies display logic and the table supplies mechanics. Without a
//! renderer, `default_display` stringifies the raw value with a few special
//! cases (booleans, dates, price-like numbers, lists).

#[cfg(test)]
#[path = "column_test.rs"]
mod column_test;

use std::fmt;
use std::sync::Arc;

use time::OffsetDateTime;

use crate::row::Row;
use crate::value::{CellValue, format_number};

/// Visual tone of a badge cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeTone {
    #[default]
    Default,
    Secondary,
    Success,
    Warning,
    Danger,
}

impl BadgeTone {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Default => "badge",
            Self::Secondary => "badge badge--secondary",
            Self::Success => "badge badge--success",
            Self::Warning => "badge badge--warning",
            Self::Danger => "badge badge--danger",
        }
    }
}

/// What a cell shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellDisplay {
    Text(String),
    Badge { label: String, tone: BadgeTone },
    Image { src: String, alt: String },
    /// Initials circle plus name.
    Avatar { name: String, src: Option<String> },
}

impl CellDisplay {
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    #[must_use]
    pub fn badge(label: impl Into<String>, tone: BadgeTone) -> Self {
        Self::Badge { label: label.into(), tone }
    }

    /// Plain string form, used by tests and non-visual consumers.
    #[must_use]
    pub fn plain(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Badge { label, .. } => label,
            Self::Image { alt, .. } => alt,
            Self::Avatar { name, .. } => name,
        }
    }
}

pub type CellRenderer<R> = Arc<dyn Fn(&R) -> CellDisplay + Send + Sync>;

pub struct ColumnSchema<R> {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub renderer: Option<CellRenderer<R>>,
}

impl<R> Clone for ColumnSchema<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            renderer: self.renderer.clone(),
        }
    }
}

impl<R> fmt::Debug for ColumnSchema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSchema")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

impl<R: Row> ColumnSchema<R> {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self { key: key.into(), label: label.into(), sortable: false, renderer: None }
    }

    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    #[must_use]
    pub fn render(mut self, renderer: impl Fn(&R) -> CellDisplay + Send + Sync + 'static) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Display for one row: the renderer if present, else the default rules.
    #[must_use]
    pub fn display(&self, row: &R) -> CellDisplay {
        match &self.renderer {
            Some(renderer) => renderer(row),
            None => default_display(&self.key, &row.field(&self.key)),
        }
    }
}

/// Generic stringify used when a column has no renderer.
#[must_use]
pub fn default_display(key: &str, value: &CellValue) -> CellDisplay {
    match value {
        CellValue::Null => CellDisplay::text(""),
        CellValue::Bool(true) => CellDisplay::badge("Yes", BadgeTone::Default),
        CellValue::Bool(false) => CellDisplay::badge("No", BadgeTone::Secondary),
        CellValue::Date(d) => CellDisplay::Text(locale_date(*d)),
        CellValue::Number(n) if key.to_ascii_lowercase().contains("price") => CellDisplay::Text(currency(*n)),
        CellValue::Number(n) => CellDisplay::Text(format_number(*n)),
        CellValue::Text(s) => CellDisplay::Text(s.clone()),
        CellValue::List(items) => CellDisplay::Text(
            items.iter().map(CellValue::search_text).collect::<Vec<_>>().join(", "),
        ),
    }
}

/// `M/D/YYYY`, the en-US short date.
#[must_use]
pub fn locale_date(d: OffsetDateTime) -> String {
    format!("{}/{}/{}", u8::from(d.month()), d.day(), d.year())
}

/// `$49.99`
#[must_use]
pub fn currency(n: f64) -> String {
    format!("${n:.2}")
}
