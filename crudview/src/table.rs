//! Data table engine: search, sort, paginate, row actions.
//!
//! DESIGN
//! ======
//! The engine is a pure projection `rows -> visible page`:
//! search (every property, case-insensitive) -> stable sort on the active
//! column -> slice the requested page. It borrows rows and never mutates
//! them; create/update/delete happen in the caller's action handlers.
//!
//! Search query, sort state, and current page are independent inputs, so a
//! page change never resets search or sort.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::fmt;
use std::sync::Arc;

use crate::column::ColumnSchema;
use crate::row::Row;

/// Placeholder shown when the visible page is empty.
pub const EMPTY_MESSAGE: &str = "No data found";

pub const DEFAULT_PAGE_SIZE: usize = 10;

// =============================================================================
// SEARCH
// =============================================================================

/// Rows with at least one property containing `query`, in input order.
/// An empty query keeps every row. Whitespace in the query is significant.
#[must_use]
pub fn search<'a, R: Row>(rows: &'a [R], query: &str) -> Vec<&'a R> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }
    rows.iter().filter(|row| row.matches(&needle)).collect()
}

// =============================================================================
// SORT
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    #[must_use]
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "\u{2191}",
            Self::Descending => "\u{2193}",
        }
    }
}

/// At most one active sort column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Header click: same column flips direction, a new column starts ascending.
    pub fn toggle(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key.to_owned());
            self.direction = SortDirection::Ascending;
        }
    }

    /// Direction for `key` when it is the active column.
    #[must_use]
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        (self.key.as_deref() == Some(key)).then_some(self.direction)
    }
}

/// Stable sort by the active column; no active column keeps input order.
pub fn sort_rows<R: Row>(rows: &mut [&R], sort: &SortState) {
    let Some(key) = sort.key.as_deref() else {
        return;
    };
    rows.sort_by(|a, b| {
        let ord = a.field(key).natural_cmp(&b.field(key));
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Requested page (1-indexed) and page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, page_size: DEFAULT_PAGE_SIZE }
    }
}

impl Pagination {
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self { page: 1, page_size: page_size.max(1) }
    }
}

/// Resolved slice bounds for one page. `start..end` indexes the filtered rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    /// Pages beyond the last clamp to the last; page 0 clamps to 1.
    #[must_use]
    pub fn new(total: usize, requested: Pagination) -> Self {
        let page_size = requested.page_size.max(1);
        let total_pages = total.div_ceil(page_size).max(1);
        let page = requested.page.clamp(1, total_pages);
        let start = ((page - 1) * page_size).min(total);
        let end = (start + page_size).min(total);
        Self { page, page_size, total, total_pages, start, end }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    #[must_use]
    pub fn previous_page(&self) -> Option<usize> {
        self.has_previous().then(|| self.page - 1)
    }

    #[must_use]
    pub fn next_page(&self) -> Option<usize> {
        self.has_next().then(|| self.page + 1)
    }

    /// "Showing X to Y of N results"
    #[must_use]
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "Showing 0 to 0 of 0 results".to_owned();
        }
        format!("Showing {} to {} of {} results", self.start + 1, self.end, self.total)
    }
}

// =============================================================================
// ACTIONS & CONFIG
// =============================================================================

pub type RowHandler<R> = Arc<dyn Fn(&R) + Send + Sync>;

/// Optional per-row handlers. Each present entry renders one action button.
pub struct RowActions<R> {
    pub view: Option<RowHandler<R>>,
    pub edit: Option<RowHandler<R>>,
    pub delete: Option<RowHandler<R>>,
}

impl<R> Default for RowActions<R> {
    fn default() -> Self {
        Self { view: None, edit: None, delete: None }
    }
}

impl<R> Clone for RowActions<R> {
    fn clone(&self) -> Self {
        Self { view: self.view.clone(), edit: self.edit.clone(), delete: self.delete.clone() }
    }
}

impl<R> fmt::Debug for RowActions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowActions")
            .field("view", &self.view.is_some())
            .field("edit", &self.edit.is_some())
            .field("delete", &self.delete.is_some())
            .finish()
    }
}

impl<R> RowActions<R> {
    #[must_use]
    pub fn on_view(mut self, handler: impl Fn(&R) + Send + Sync + 'static) -> Self {
        self.view = Some(Arc::new(handler));
        self
    }

    #[must_use]
    pub fn on_edit(mut self, handler: impl Fn(&R) + Send + Sync + 'static) -> Self {
        self.edit = Some(Arc::new(handler));
        self
    }

    #[must_use]
    pub fn on_delete(mut self, handler: impl Fn(&R) + Send + Sync + 'static) -> Self {
        self.delete = Some(Arc::new(handler));
        self
    }

    #[must_use]
    pub fn any(&self) -> bool {
        self.view.is_some() || self.edit.is_some() || self.delete.is_some()
    }
}

pub struct TableConfig<R> {
    pub columns: Vec<ColumnSchema<R>>,
    pub actions: RowActions<R>,
    /// `None` shows every row on one page.
    pub page_size: Option<usize>,
}

impl<R> Clone for TableConfig<R> {
    fn clone(&self) -> Self {
        Self { columns: self.columns.clone(), actions: self.actions.clone(), page_size: self.page_size }
    }
}

impl<R: Row> TableConfig<R> {
    #[must_use]
    pub fn new(columns: Vec<ColumnSchema<R>>) -> Self {
        Self { columns, actions: RowActions::default(), page_size: None }
    }

    #[must_use]
    pub fn actions(mut self, actions: RowActions<R>) -> Self {
        self.actions = actions;
        self
    }

    #[must_use]
    pub fn paginate(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size.max(1));
        self
    }

    /// Header columns plus the trailing actions column when any action exists.
    #[must_use]
    pub fn column_span(&self) -> usize {
        self.columns.len() + usize::from(self.actions.any())
    }

    /// Search, sort, then slice the requested page.
    #[must_use]
    pub fn project<'a>(&self, rows: &'a [R], query: &str, sort: &SortState, page: usize) -> TableView<'a, R> {
        let mut filtered = search(rows, query);
        sort_rows(&mut filtered, sort);
        match self.page_size {
            Some(page_size) => {
                let window = PageWindow::new(filtered.len(), Pagination { page, page_size });
                let visible = filtered[window.start..window.end].to_vec();
                TableView { rows: visible, window: Some(window) }
            }
            None => TableView { rows: filtered, window: None },
        }
    }
}

/// Visible rows of one projection.
#[derive(Debug)]
pub struct TableView<'a, R> {
    pub rows: Vec<&'a R>,
    pub window: Option<PageWindow>,
}

impl<R> TableView<'_, R> {
    /// Show the single "No data found" row instead of data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
