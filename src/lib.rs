//! Emotion mirror library for real-time facial expression classification.
//!
//! This library classifies a user's facial expression into one of four
//! emotion states (neutral, happy, angry, surprised) from per-frame
//! blendshape scores produced by an external face-tracking model. The
//! pipeline consists of:
//! 1. A frame source delivering zero or one blendshape set per video frame
//! 2. Derived-signal computation from named muscle scores
//! 3. An ordered threshold rule producing exactly one emotion label
//! 4. Display state tracking the active label for the presentation layer
//!
//! Camera acquisition and the face-tracking model itself are external
//! collaborators; this crate starts at their output boundary.
//!
//! # Examples
//!
//! ## Classifying a single frame
//!
//! ```
//! use emotion_mirror::blendshapes::BlendshapeSet;
//! use emotion_mirror::classifier::{classify, EmotionLabel};
//!
//! let shapes: BlendshapeSet = [
//!     ("mouthSmileLeft".to_string(), 0.4),
//!     ("mouthSmileRight".to_string(), 0.3),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(classify(Some(&shapes)), EmotionLabel::Happy);
//! assert_eq!(classify(None), EmotionLabel::Neutral);
//! ```
//!
//! ## Tracking the active emotion across frames
//!
//! ```
//! use emotion_mirror::classifier::{classify, EmotionLabel};
//! use emotion_mirror::display_state::EmotionDisplayState;
//!
//! let mut state = EmotionDisplayState::new();
//! assert_eq!(state.active(), EmotionLabel::Neutral);
//!
//! // Each frame's result is a legal transition from any state
//! state.set_active(classify(None));
//! assert!(state.is_active(EmotionLabel::Neutral));
//! ```
//!
//! ## Replaying a recorded tracking session
//!
//! ```no_run
//! use emotion_mirror::app::{AppConfig, EmotionApp, FrameInput, PresenterMode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig {
//!     frame_input: FrameInput::File("recordings/session.jsonl".to_string()),
//!     presenter_mode: PresenterMode::Terminal,
//!     realtime: false,
//!     target_fps: 30.0,
//! };
//!
//! let mut app = EmotionApp::new(config)?;
//! app.run()?;
//! # Ok(())
//! # }
//! ```

/// Blendshape score types and named-category lookup
pub mod blendshapes;

/// Emotion classification from derived muscle signals
pub mod classifier;

/// Active-emotion display state
pub mod display_state;

/// Frame sources delivering per-tick tracking results
pub mod frame_source;

/// Presentation boundary for the active emotion
pub mod presenter;

/// Error types and result handling
pub mod error;

/// Main application module
pub mod app;

/// Constants used throughout the application
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
