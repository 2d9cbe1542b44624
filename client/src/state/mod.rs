//! Plain UI state structs, held in `RwSignal`s by their components.
//!
//! DESIGN
//! ======
//! Each struct owns the transient state of one component or page and
//! exposes the transitions as methods, so behavior can be tested without a
//! reactive runtime. Only `auth` is shared through context.

pub mod auth;
pub mod highlight;
pub mod marquee;
pub mod modal;
pub mod nav_menu;
pub mod org_form;
pub mod organization;
pub mod people;
pub mod profile;
pub mod schedule;
pub mod sidebar;
pub mod training;
