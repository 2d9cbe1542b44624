//! Browser and formatting helpers used by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anything that touches `window`, local storage, or animation frames lives
//! here behind a small API with a server-side no-op, so pages render the same
//! markup under SSR and hydration.

pub mod alive;
pub mod auth;
pub mod dark_mode;
pub mod format;
pub mod frame_loop;
pub mod scroll_lock;
pub mod status;
