//! Emotion classification from blendshape scores.
//!
//! This module is the decision engine: it derives a handful of scalar
//! signals from named muscle scores and applies an ordered threshold rule
//! to produce exactly one emotion label per frame. Classification is total
//! over its input: an absent set (no face detected) maps to neutral, never
//! to an error.

use crate::blendshapes::BlendshapeSet;
use crate::constants::{
    BROW_DOWN_CATEGORIES, BROW_DOWN_THRESHOLD, BROW_UP_CATEGORIES, BROW_UP_WEIGHT,
    EYE_OPEN_CATEGORIES, SMILE_CATEGORIES, SMILE_THRESHOLD, SURPRISE_THRESHOLD,
};

/// One of the four discrete emotion states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionLabel {
    /// No expression detected, or no face present
    Neutral,
    /// Smile signal dominant
    Happy,
    /// Brow-down (frown) signal dominant
    Angry,
    /// Wide eyes and raised brows dominant
    Surprised,
}

impl EmotionLabel {
    /// All four labels in display order
    pub const ALL: [Self; 4] = [Self::Neutral, Self::Happy, Self::Angry, Self::Surprised];

    /// Text shown to the user for this label
    #[must_use]
    pub fn display_text(self) -> &'static str {
        match self {
            Self::Neutral => "NEUTRAL",
            Self::Happy => "HAPPY!",
            Self::Angry => "ANGRY",
            Self::Surprised => "SURPRISED",
        }
    }

    /// Display color paired with this label
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Neutral => "white",
            Self::Happy => "#00ff00",
            Self::Angry => "red",
            Self::Surprised => "yellow",
        }
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Derived scalar signals computed for one frame.
///
/// Transient by design: computed from named lookups during classification
/// and never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signals {
    /// Sum of the two mouth-smile scores
    pub smile: f32,
    /// Sum of the three brow-lowering scores
    pub brow_down: f32,
    /// Sum of the two eye-widening scores
    pub eye_open: f32,
    /// Sum of the three brow-raising scores
    pub brow_up: f32,
}

impl Signals {
    /// Compute all signals from one blendshape set
    #[must_use]
    pub fn from_set(set: &BlendshapeSet) -> Self {
        let sum = |names: &[&str]| -> f32 { names.iter().map(|n| set.score(n)).sum() };

        Self {
            smile: sum(&SMILE_CATEGORIES),
            brow_down: sum(&BROW_DOWN_CATEGORIES),
            eye_open: sum(&EYE_OPEN_CATEGORIES),
            brow_up: sum(&BROW_UP_CATEGORIES),
        }
    }

    /// Combined surprise signal: wide eyes plus half-weighted raised brows
    #[must_use]
    pub fn surprise(&self) -> f32 {
        self.brow_up.mul_add(BROW_UP_WEIGHT, self.eye_open)
    }
}

/// Classify one frame's blendshapes into an emotion label.
///
/// `None` means no face was detected this frame and maps to neutral
/// immediately. Thresholds are checked in strict priority order (happy,
/// angry, surprised) and the first satisfied rule wins; scores can exceed
/// several thresholds at once, so the order is part of the contract. All
/// comparisons are strict `>`.
#[must_use]
pub fn classify(set: Option<&BlendshapeSet>) -> EmotionLabel {
    let Some(set) = set else {
        return EmotionLabel::Neutral;
    };

    let signals = Signals::from_set(set);

    if signals.smile > SMILE_THRESHOLD {
        EmotionLabel::Happy
    } else if signals.brow_down > BROW_DOWN_THRESHOLD {
        EmotionLabel::Angry
    } else if signals.surprise() > SURPRISE_THRESHOLD {
        EmotionLabel::Surprised
    } else {
        EmotionLabel::Neutral
    }
}
