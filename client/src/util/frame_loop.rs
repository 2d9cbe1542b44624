//! Cancellable per-frame repeating callback.
//!
//! DESIGN
//! ======
//! A `FrameLoop` owns exactly one pending frame request at a time. Each frame
//! runs the tick and then books the next frame, so stopping the loop only has
//! to cancel that single request. The scheduler sits behind a trait: the
//! browser implementation wraps `requestAnimationFrame`, tests drive frames
//! by hand.
//!
//! The pending callback holds only a weak reference to the loop, so dropping
//! the `FrameLoop` both cancels the request and frees the tick.

#[cfg(test)]
#[path = "frame_loop_test.rs"]
mod frame_loop_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Source of "call me on the next frame" requests.
pub trait FrameScheduler: 'static {
    /// Book `callback` for the next frame. `None` means nothing was booked.
    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<i32>;

    /// Drop a booked request before it fires.
    fn cancel(&self, id: i32);
}

struct LoopShared<S: FrameScheduler> {
    scheduler: S,
    pending: Cell<Option<i32>>,
    running: Cell<bool>,
    tick: RefCell<Box<dyn FnMut()>>,
}

/// Owned handle for a running frame loop. Dropping it stops the loop.
pub struct FrameLoop<S: FrameScheduler> {
    shared: Rc<LoopShared<S>>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    /// Book the first frame and return the handle.
    pub fn start(scheduler: S, tick: impl FnMut() + 'static) -> Self {
        let shared = Rc::new(LoopShared {
            scheduler,
            pending: Cell::new(None),
            running: Cell::new(true),
            tick: RefCell::new(Box::new(tick)),
        });
        schedule_next(&shared);
        Self { shared }
    }

    /// Cancel the pending frame. Idempotent.
    pub fn stop(&self) {
        self.shared.running.set(false);
        if let Some(id) = self.shared.pending.take() {
            self.shared.scheduler.cancel(id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.get()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.shared.pending.get().is_some()
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule_next<S: FrameScheduler>(shared: &Rc<LoopShared<S>>) {
    let weak = Rc::downgrade(shared);
    let id = shared.scheduler.request(Box::new(move || {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        shared.pending.set(None);
        if !shared.running.get() {
            return;
        }
        {
            let mut tick = shared.tick.borrow_mut();
            (*tick)();
        }
        if shared.running.get() {
            schedule_next(&shared);
        }
    }));
    shared.pending.set(id);
    if id.is_none() {
        shared.running.set(false);
    }
}

// =============================================================================
// BROWSER
// =============================================================================

#[cfg(feature = "hydrate")]
pub use browser::BrowserScheduler;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::FrameScheduler;

    /// `requestAnimationFrame` scheduler.
    ///
    /// The JS side only holds a function reference, so the Rust closures are
    /// kept here. A new request is booked from inside the previous frame's
    /// callback, which must stay alive until it returns; everything older
    /// than that is released.
    #[derive(Default)]
    pub struct BrowserScheduler {
        closures: Rc<RefCell<VecDeque<Closure<dyn FnMut(f64)>>>>,
    }

    impl FrameScheduler for BrowserScheduler {
        fn request(&self, callback: Box<dyn FnOnce()>) -> Option<i32> {
            let window = web_sys::window()?;
            let mut callback = Some(callback);
            let closure = Closure::wrap(Box::new(move |_ts: f64| {
                if let Some(f) = callback.take() {
                    f();
                }
            }) as Box<dyn FnMut(f64)>);

            let id = window.request_animation_frame(closure.as_ref().unchecked_ref()).ok()?;
            let mut closures = self.closures.borrow_mut();
            closures.push_back(closure);
            while closures.len() > 2 {
                closures.pop_front();
            }
            Some(id)
        }

        fn cancel(&self, id: i32) {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}
