//! Constants used throughout the application

/// Number of blendshape categories produced by the face-tracking model
pub const NUM_BLENDSHAPE_CATEGORIES: usize = 52;

/// Default frames per second assumption
pub const DEFAULT_FPS: f64 = 30.0;

/// Smile signal threshold (strictly above -> happy)
pub const SMILE_THRESHOLD: f32 = 0.6;

/// Brow-down signal threshold (strictly above -> angry)
pub const BROW_DOWN_THRESHOLD: f32 = 0.5;

/// Surprise signal threshold (strictly above -> surprised)
pub const SURPRISE_THRESHOLD: f32 = 0.8;

/// Weight applied to the brow-up component of the surprise signal
pub const BROW_UP_WEIGHT: f32 = 0.5;

/// Category names consumed for the smile signal
pub const SMILE_CATEGORIES: [&str; 2] = ["mouthSmileLeft", "mouthSmileRight"];

/// Category names consumed for the brow-down signal
pub const BROW_DOWN_CATEGORIES: [&str; 3] = ["browInnerDown", "browDownLeft", "browDownRight"];

/// Category names consumed for the eye-open component of surprise
pub const EYE_OPEN_CATEGORIES: [&str; 2] = ["eyeWideLeft", "eyeWideRight"];

/// Category names consumed for the brow-up component of surprise
pub const BROW_UP_CATEGORIES: [&str; 3] = ["browInnerUp", "browOuterUpLeft", "browOuterUpRight"];
