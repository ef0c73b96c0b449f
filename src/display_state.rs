//! Active-emotion display state.
//!
//! Holds the single emotion label currently shown to the user. The
//! presentation layer polls this state instead of sharing mutable display
//! handles with the classifier.

use crate::classifier::EmotionLabel;

/// Tracks which emotion label is currently active.
///
/// Exactly one label is active at all times; the initial state is neutral.
/// Every label is a legal transition target from every other label, and
/// re-activating the current label is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionDisplayState {
    active: EmotionLabel,
}

impl EmotionDisplayState {
    /// Create a new state with neutral active
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: EmotionLabel::Neutral,
        }
    }

    /// Activate `label` and deactivate all other labels
    pub fn set_active(&mut self, label: EmotionLabel) {
        self.active = label;
    }

    /// The currently active label
    #[must_use]
    pub fn active(&self) -> EmotionLabel {
        self.active
    }

    /// Whether `label` is the active one
    #[must_use]
    pub fn is_active(&self, label: EmotionLabel) -> bool {
        self.active == label
    }
}

impl Default for EmotionDisplayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_neutral() {
        let state = EmotionDisplayState::new();
        assert_eq!(state.active(), EmotionLabel::Neutral);
        assert!(state.is_active(EmotionLabel::Neutral));
    }

    #[test]
    fn test_set_active_is_exclusive() {
        let mut state = EmotionDisplayState::new();
        state.set_active(EmotionLabel::Happy);

        let active_count = EmotionLabel::ALL.iter().filter(|&&l| state.is_active(l)).count();
        assert_eq!(active_count, 1);
        assert!(state.is_active(EmotionLabel::Happy));
        assert!(!state.is_active(EmotionLabel::Neutral));
    }

    #[test]
    fn test_exactly_one_active_after_any_sequence() {
        let mut state = EmotionDisplayState::new();
        let sequence = [
            EmotionLabel::Angry,
            EmotionLabel::Angry,
            EmotionLabel::Surprised,
            EmotionLabel::Neutral,
            EmotionLabel::Happy,
        ];

        for label in sequence {
            state.set_active(label);
            let active_count = EmotionLabel::ALL.iter().filter(|&&l| state.is_active(l)).count();
            assert_eq!(active_count, 1);
            assert_eq!(state.active(), label);
        }
    }

    #[test]
    fn test_reactivation_is_noop() {
        let mut state = EmotionDisplayState::new();
        state.set_active(EmotionLabel::Surprised);
        let before = state;
        state.set_active(EmotionLabel::Surprised);
        assert_eq!(state, before);
    }
}
