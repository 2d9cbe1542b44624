//! Scroll position of the logo carousel.
//!
//! The strip holds every image twice; once the offset has travelled half the
//! track width the second copy sits exactly where the first started, so the
//! offset snaps back to zero without a visible jump.

#[cfg(test)]
#[path = "marquee_test.rs"]
mod marquee_test;

pub const DEFAULT_SPEED: f64 = 50.0;
pub const FRAMES_PER_SECOND: f64 = 60.0;
pub const ITEM_WIDTH_PX: u32 = 280;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marquee {
    pub offset: f64,
    /// Pixels per second.
    pub speed: f64,
}

impl Marquee {
    pub fn new(speed: f64) -> Self {
        Self { offset: 0.0, speed }
    }

    /// Advance one frame against a track `track_width` pixels wide and
    /// return the new offset.
    pub fn step(&mut self, track_width: f64) -> f64 {
        self.offset -= self.speed / FRAMES_PER_SECOND;
        if self.offset <= -track_width / 2.0 {
            self.offset = 0.0;
        }
        self.offset
    }
}

/// The image list followed by itself.
pub fn looped_strip<T: Clone>(images: &[T]) -> Vec<T> {
    images.iter().chain(images).cloned().collect()
}

pub fn transform(offset: f64) -> String {
    format!("translateX({offset}px)")
}
