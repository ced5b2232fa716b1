//! Local UI chrome state (theme, catalog layout, admin sidebar).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the application store so
//! domain state stays a mirror of the server.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::dark_mode::Theme;

/// Layout of the course catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogLayout {
    #[default]
    Grid,
    List,
}

impl CatalogLayout {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Grid => "course-grid",
            Self::List => "course-list",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub catalog_layout: CatalogLayout,
    /// Admin sidebar collapsed to icons only.
    pub sidebar_collapsed: bool,
}
