//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `data_table` and `dynamic_form` are the generic CRUD views; the rest are
//! domain widgets that read the application store from context.

pub mod admin_sidebar;
pub mod blog_card;
pub mod comment_section;
pub mod course_card;
pub mod course_filters;
pub mod data_table;
pub mod dynamic_form;
pub mod enrollment_button;
pub mod error_banner;
pub mod nav_bar;
pub mod require_role;
pub mod role_badge;
pub mod stats_cards;
pub mod user_avatar;
