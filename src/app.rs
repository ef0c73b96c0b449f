//! Main application module: the per-frame emotion pipeline.
//!
//! Pulls tracked frames from a `FrameSource` in delivery order, classifies
//! each one, updates the display state, and hands the result to the
//! presenter. Single-threaded and synchronous: classification never blocks,
//! so tearing the loop down needs no cancellation.

use crate::display_state::EmotionDisplayState;
use crate::error::Result;
use crate::frame_source::{FrameSource, ReplaySource, TrackedFrame};
use crate::presenter::{NullPresenter, Presenter, TerminalPresenter};
use crate::{classifier, constants};
use log::{debug, info, warn};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Recorded frame input
    pub frame_input: FrameInput,
    /// Presentation mode
    pub presenter_mode: PresenterMode,
    /// Pace replay at `target_fps` instead of running flat out
    pub realtime: bool,
    /// Target framerate for paced replay
    pub target_fps: f64,
}

/// Tracked-frame input source
#[derive(Debug, Clone)]
pub enum FrameInput {
    /// JSON-lines recording of tracker output
    File(String),
}

/// Presentation mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterMode {
    /// Colored terminal output
    Terminal,
    /// No output (headless)
    None,
}

/// Main application struct
pub struct EmotionApp {
    source: Box<dyn FrameSource>,
    presenter: Box<dyn Presenter>,
    display_state: EmotionDisplayState,
    last_timestamp_ms: Option<f64>,
    frame_interval: Option<Duration>,
}

impl EmotionApp {
    /// Create a new emotion mirror application
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Initializing emotion mirror application");

        let source: Box<dyn FrameSource> = match &config.frame_input {
            FrameInput::File(path) => {
                info!("Opening frame recording: {path}");
                Box::new(ReplaySource::open(path)?)
            }
        };

        let presenter: Box<dyn Presenter> = match config.presenter_mode {
            PresenterMode::Terminal => Box::new(TerminalPresenter::new()),
            PresenterMode::None => Box::new(NullPresenter),
        };

        let frame_interval = if config.realtime {
            let fps = if config.target_fps > 0.0 {
                config.target_fps
            } else {
                constants::DEFAULT_FPS
            };
            info!("Realtime replay at {fps} fps");
            Some(Duration::from_secs_f64(1.0 / fps))
        } else {
            None
        };

        Ok(Self {
            source,
            presenter,
            display_state: EmotionDisplayState::new(),
            last_timestamp_ms: None,
            frame_interval,
        })
    }

    /// Process one tracked frame.
    ///
    /// Returns `false` when the tick was stale (timestamp unchanged since
    /// the last evaluated frame); the display state is left untouched in
    /// that case.
    pub fn process_frame(&mut self, frame: &TrackedFrame) -> bool {
        if self.last_timestamp_ms == Some(frame.timestamp_ms) {
            debug!("Stale tick at {} ms, skipping", frame.timestamp_ms);
            return false;
        }
        self.last_timestamp_ms = Some(frame.timestamp_ms);

        let label = classifier::classify(frame.blendshapes.as_ref());
        debug!("Frame {} ms -> {label}", frame.timestamp_ms);

        self.display_state.set_active(label);
        self.presenter.show_emotion(&self.display_state);
        true
    }

    /// Current display state
    #[must_use]
    pub fn display_state(&self) -> &EmotionDisplayState {
        &self.display_state
    }

    /// Run the frame loop until the source is exhausted
    pub fn run(&mut self) -> Result<()> {
        self.presenter.show_message("Tracking ready, replaying frames.");

        let mut processed = 0usize;
        let mut skipped = 0usize;

        loop {
            let frame = match self.source.next_frame() {
                Ok(Some(frame)) => frame,
                Ok(None) => break,
                Err(e) => {
                    warn!("Frame source failed: {e}");
                    self.presenter.show_message(&format!("Error: {e}"));
                    return Err(e);
                }
            };

            if self.process_frame(&frame) {
                processed += 1;
            } else {
                skipped += 1;
            }

            if let Some(interval) = self.frame_interval {
                std::thread::sleep(interval);
            }
        }

        info!("Replay finished: {processed} frames classified, {skipped} stale ticks");
        Ok(())
    }
}
