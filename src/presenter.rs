//! Presentation boundary for the active emotion.
//!
//! The classifier never touches the display; it hands each result to a
//! `Presenter`, which renders the label's text in its paired color and
//! highlights the matching icon. Upstream failures also surface here as
//! visible messages instead of crashing the frame loop.

use crate::classifier::EmotionLabel;
use crate::display_state::EmotionDisplayState;
use colored::{Color, Colorize};

/// Renders the active emotion and status messages to the user
pub trait Presenter {
    /// Render the current display state
    fn show_emotion(&mut self, state: &EmotionDisplayState);

    /// Show a status or error message
    fn show_message(&mut self, text: &str);
}

/// Terminal presenter using ANSI colors
pub struct TerminalPresenter {
    last_shown: Option<EmotionLabel>,
}

impl TerminalPresenter {
    /// Create a new terminal presenter
    #[must_use]
    pub fn new() -> Self {
        Self { last_shown: None }
    }

    fn terminal_color(label: EmotionLabel) -> Color {
        // Labels carry CSS-style color names; "#00ff00" is plain green on a
        // terminal.
        match label {
            EmotionLabel::Neutral => Color::White,
            EmotionLabel::Happy => Color::Green,
            EmotionLabel::Angry => Color::Red,
            EmotionLabel::Surprised => Color::Yellow,
        }
    }

    fn icon_row(state: &EmotionDisplayState) -> String {
        EmotionLabel::ALL
            .iter()
            .map(|&label| {
                if state.is_active(label) {
                    format!("[{}]", label.display_text())
                } else {
                    format!(" {} ", label.display_text())
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for TerminalPresenter {
    fn show_emotion(&mut self, state: &EmotionDisplayState) {
        let label = state.active();

        // Only repaint on transitions to keep the output readable
        if self.last_shown == Some(label) {
            return;
        }
        self.last_shown = Some(label);

        let text = label.display_text().color(Self::terminal_color(label)).bold();
        println!("{}   {}", text, Self::icon_row(state));
    }

    fn show_message(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Presenter that renders nothing (headless runs and tests)
#[derive(Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn show_emotion(&mut self, _state: &EmotionDisplayState) {}

    fn show_message(&mut self, _text: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_row_highlights_active() {
        let mut state = EmotionDisplayState::new();
        state.set_active(EmotionLabel::Angry);

        let row = TerminalPresenter::icon_row(&state);
        assert!(row.contains("[ANGRY]"));
        assert!(!row.contains("[NEUTRAL]"));
        assert!(row.contains("HAPPY!"));
    }

    #[test]
    fn test_null_presenter_accepts_everything() {
        let mut presenter = NullPresenter;
        presenter.show_emotion(&EmotionDisplayState::new());
        presenter.show_message("AI Ready! Show me a face.");
    }
}
