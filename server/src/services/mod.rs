//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the account-area business rules (who may see or
//! change which organization, how profiles are created) so route handlers can
//! stay focused on protocol translation and cookie plumbing.

pub mod organization;
pub mod profile;
