//! Modal sizing and close rules.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// Dialog width preset.
///
/// | size | narrow | wide |
/// |------|--------|------|
/// | sm   | 24rem  | 28rem |
/// | md   | 28rem  | 32rem |
/// | lg   | 32rem  | 42rem |
/// | xl   | 36rem  | 56rem |
/// | full | 100%   | 80rem |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
}

impl ModalSize {
    pub fn class(self) -> &'static str {
        match self {
            Self::Sm => "modal__dialog modal__dialog--sm",
            Self::Md => "modal__dialog modal__dialog--md",
            Self::Lg => "modal__dialog modal__dialog--lg",
            Self::Xl => "modal__dialog modal__dialog--xl",
            Self::Full => "modal__dialog modal__dialog--full",
        }
    }
}

/// Whether a keydown should close the dialog.
pub fn closes_on_key(open: bool, key: &str) -> bool {
    open && key == "Escape"
}

/// Whether a click caught by the backdrop should close the dialog. Only a
/// click that started on the backdrop itself counts; clicks bubbling up from
/// the dialog content do not.
pub fn closes_on_click(open: bool, target_is_backdrop: bool) -> bool {
    open && target_is_backdrop
}
