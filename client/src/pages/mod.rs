//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Marketing pages are static content around shared
//! sections; `account` pages fetch fresh rows from `/api` on every mount.

pub mod about;
pub mod account;
pub mod careers;
pub mod courses;
pub mod home;
pub mod in_person;
pub mod instruction_design;
pub mod login;
pub mod not_found;
pub mod online_training;
pub mod protected;
pub mod schedule_meeting;
