//! Liveness flag for async work started by a component.
//!
//! A `spawn_local` future keeps running after its component unmounts. Tasks
//! check the flag after each `.await` and drop their result once the owner
//! is gone.

#[cfg(test)]
#[path = "alive_test.rs"]
mod alive_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug)]
pub struct AliveFlag(Arc<AtomicBool>);

impl AliveFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn kill(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for AliveFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Flag that goes false when the current reactive owner is cleaned up.
pub fn alive_until_cleanup() -> AliveFlag {
    let alive = AliveFlag::new();
    let on_drop = alive.clone();
    on_cleanup(move || on_drop.kill());
    alive
}
