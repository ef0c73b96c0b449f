//! Configuration management for the emotion mirror application

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Frame input configuration
    pub frames: FramesConfig,

    /// Display configuration
    pub display: DisplayConfig,

    /// Replay playback configuration
    pub playback: PlaybackConfig,
}

/// Frame input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FramesConfig {
    /// Path to a JSON-lines recording of tracker output
    pub path: Option<PathBuf>,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Presentation mode ("terminal" or "none")
    pub mode: String,
}

/// Replay playback configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Pace replay at `target_fps` instead of running flat out
    pub realtime: bool,

    /// Target framerate for paced replay
    pub target_fps: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frames: FramesConfig::default(),
            display: DisplayConfig::default(),
            playback: PlaybackConfig::default(),
        }
    }
}

impl Default for FramesConfig {
    fn default() -> Self {
        Self { path: None }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: "terminal".to_string(),
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            realtime: false,
            target_fps: crate::constants::DEFAULT_FPS,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        match self.display.mode.as_str() {
            "terminal" | "none" => {}
            mode => {
                return Err(Error::ConfigError(format!(
                    "Display mode must be \"terminal\" or \"none\", got \"{mode}\""
                )));
            }
        }

        if self.playback.target_fps <= 0.0 {
            return Err(Error::ConfigError("Target FPS must be greater than 0".to_string()));
        }

        if let Some(path) = &self.frames.path {
            if !path.exists() {
                return Err(Error::ConfigError(format!(
                    "Frame recording not found: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Emotion Mirror Configuration

# Frame input
frames:
  path: "recordings/session.jsonl"

# Display settings
display:
  mode: "terminal"

# Replay playback
playback:
  realtime: false
  target_fps: 30.0
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.display.mode, "terminal");
        assert_eq!(config.playback.target_fps, 30.0);
        assert!(config.frames.path.is_some());
    }

    #[test]
    fn test_bad_display_mode_rejected() {
        let mut config = Config::default();
        config.display.mode = "opengl".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_fps_rejected() {
        let mut config = Config::default();
        config.playback.target_fps = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_recording_rejected() {
        let mut config = Config::default();
        config.frames.path = Some(PathBuf::from("/nonexistent/session.jsonl"));
        assert!(config.validate().is_err());
    }
}
