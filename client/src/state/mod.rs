//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `store` mirrors server data behind a single reducer; `ui` holds
//! presentation-only flags.

pub mod store;
pub mod ui;
