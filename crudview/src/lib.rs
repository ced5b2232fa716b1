//! # crudview
//!
//! Config-driven CRUD view engine shared by the LearnHub client.
//!
//! Pages describe forms with `FieldSchema` lists and tables with
//! `ColumnSchema` lists plus row action handlers. This crate owns the
//! mechanics behind them (validation, form state, search, sort,
//! pagination) and knows nothing about any UI framework or domain type.

pub mod column;
pub mod field;
pub mod form;
pub mod row;
pub mod table;
pub mod validation;
pub mod value;

pub use column::{BadgeTone, CellDisplay, ColumnSchema};
pub use field::{FieldKind, FieldSchema, FieldValidation, FormSchema, SelectOption};
pub use form::{FieldValue, FormData, FormState};
pub use row::Row;
pub use table::{PageWindow, Pagination, RowActions, SortDirection, SortState, TableConfig};
pub use value::CellValue;
