//! Page scroll lock used while an overlay is open.
//!
//! Writes `overflow` on `<body>`; a no-op outside the browser.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// Inline `overflow` value for the locked or released state.
pub fn overflow_value(locked: bool) -> &'static str {
    if locked { "hidden" } else { "unset" }
}

pub fn set_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", overflow_value(locked));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
