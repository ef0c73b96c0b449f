//! Blendshape score types produced by the face-tracking model.
//!
//! A blendshape is a normalized [0, 1] activation score for one facial
//! muscle unit. The upstream model emits ~52 named categories per detected
//! face; this crate only reads five of them and treats the rest as
//! irrelevant.

use serde::{Deserialize, Serialize};

/// A single (category name, score) pair for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendshapeScore {
    /// String identifier of the facial muscle category (e.g. "mouthSmileLeft")
    #[serde(rename = "categoryName")]
    pub category_name: String,

    /// Activation score in [0.0, 1.0]
    pub score: f32,
}

/// Ordered blendshape scores for one detected face in one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlendshapeSet(Vec<BlendshapeScore>);

impl BlendshapeSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Score for the named category, or 0.0 if the category is absent.
    ///
    /// A missing category means the muscle is fully relaxed, not an error.
    #[must_use]
    pub fn score(&self, name: &str) -> f32 {
        self.0
            .iter()
            .find(|s| s.category_name == name)
            .map_or(0.0, |s| s.score)
    }

    /// Number of categories in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no categories
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f32)> for BlendshapeSet {
    fn from_iter<I: IntoIterator<Item = (String, f32)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(category_name, score)| BlendshapeScore { category_name, score })
                .collect(),
        )
    }
}

impl From<Vec<BlendshapeScore>> for BlendshapeSet {
    fn from(scores: Vec<BlendshapeScore>) -> Self {
        Self(scores)
    }
}
