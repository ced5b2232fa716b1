//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages under `admin` share the admin layout and role gate.

pub mod admin;
pub mod blog;
pub mod blog_post;
pub mod course_detail;
pub mod courses;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
