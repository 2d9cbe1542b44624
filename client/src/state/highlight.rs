//! Selection state for `HighlightCard`.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

/// Which highlight is shown in the detail card. Starts at the first entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightSelection {
    selected: usize,
    len: usize,
}

impl HighlightSelection {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    /// Select entry `index`; out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
        }
    }

    /// Index to render in the detail card, `None` for an empty list.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.selected)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.current() == Some(index)
    }
}
