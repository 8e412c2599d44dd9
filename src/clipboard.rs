// Snippet copy control: clipboard write plus the 2-second "Copied!"
// confirmation window.

use crate::data::{sample, SampleId};

/// How long the "Copied!" confirmation stays visible.
pub const CONFIRMATION_WINDOW_MS: u64 = 2000;

/// Token identifying one copy action. The reset only applies while its
/// token is still the latest, so a re-copy supersedes the pending reset
/// instead of cutting the new window short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetToken(u64);

/// Which sample (if any) currently shows the "Copied!" confirmation.
#[derive(Debug, Default)]
pub struct CopyConfirmation {
    last_copied: Option<SampleId>,
    generation: u64,
}

impl CopyConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_copied(&self) -> Option<SampleId> {
        self.last_copied
    }

    /// Record a copy of `id` and start a new confirmation window.
    pub fn mark_copied(&mut self, id: SampleId) -> ResetToken {
        self.last_copied = Some(id);
        self.generation += 1;
        ResetToken(self.generation)
    }

    /// Clear the confirmation if `token` is still the latest window.
    /// Returns whether a visible reset happened.
    pub fn clear_if_current(&mut self, token: ResetToken) -> bool {
        if token.0 == self.generation && self.last_copied.is_some() {
            self.last_copied = None;
            true
        } else {
            false
        }
    }
}

/// Write a sample's source text to the system clipboard. Fire-and-forget:
/// the promise is dropped and rejection is not observed.
pub fn write_sample_to_clipboard(id: SampleId) {
    if let Some(window) = web_sys::window() {
        let clipboard = window.navigator().clipboard();
        let _ = clipboard.write_text(sample(id).source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn copy_sets_last_copied_immediately() {
        for id in SampleId::ALL {
            let mut state = CopyConfirmation::new();
            state.mark_copied(id);
            assert_eq!(state.last_copied(), Some(id));
        }
    }

    #[test]
    fn reset_fires_after_undisturbed_window() {
        let mut state = CopyConfirmation::new();
        let token = state.mark_copied(SampleId::Html);
        assert!(state.clear_if_current(token));
        assert_eq!(state.last_copied(), None);
    }

    #[test]
    fn later_copy_supersedes_pending_reset() {
        let mut state = CopyConfirmation::new();
        let first = state.mark_copied(SampleId::Html);
        let second = state.mark_copied(SampleId::Css);
        assert_eq!(state.last_copied(), Some(SampleId::Css));

        // The superseded timer is a no-op; exactly one visible reset.
        assert!(!state.clear_if_current(first));
        assert_eq!(state.last_copied(), Some(SampleId::Css));
        assert!(state.clear_if_current(second));
        assert_eq!(state.last_copied(), None);
        assert!(!state.clear_if_current(second));
    }

    #[test]
    fn recopying_the_same_sample_restarts_the_window() {
        let mut state = CopyConfirmation::new();
        let first = state.mark_copied(SampleId::Js);
        let second = state.mark_copied(SampleId::Js);
        assert_ne!(first, second);
        assert!(!state.clear_if_current(first));
        assert_eq!(state.last_copied(), Some(SampleId::Js));
        assert!(state.clear_if_current(second));
    }
}
