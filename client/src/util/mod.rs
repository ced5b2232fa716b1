//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages stay thin: filtering, statistics, form schemas and formatting live
//! here as plain functions over the store's data so they can be unit tested
//! without a browser.

pub mod auth;
pub mod catalog;
pub mod comment_tree;
pub mod dark_mode;
pub mod dialog;
pub mod format;
pub mod forms;
pub mod stats;
