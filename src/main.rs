//! Emotion mirror application: replay face-tracking output and show emotions.

use anyhow::Result;
use clap::Parser;
use emotion_mirror::app::{AppConfig, EmotionApp, FrameInput, PresenterMode};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON-lines recording of face-tracker output
    #[arg(short, long)]
    frames: Option<String>,

    /// Presentation mode (terminal, none)
    #[arg(short, long, default_value = "terminal")]
    gui: String,

    /// Pace replay at the target framerate
    #[arg(short, long)]
    realtime: bool,

    /// Target framerate for paced replay
    #[arg(long, default_value = "30.0")]
    fps: f64,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Emotion Mirror");

    // Load configuration if provided
    let config_file = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        match emotion_mirror::config::Config::from_file(config_path) {
            Ok(cfg) => {
                cfg.validate()?;
                Some(cfg)
            }
            Err(e) => {
                log::warn!("Failed to load config file: {e}. Using defaults.");
                None
            }
        }
    } else {
        None
    };

    // Command line takes precedence over the config file
    let frames_path = args
        .frames
        .or_else(|| {
            config_file
                .as_ref()
                .and_then(|c| c.frames.path.as_ref())
                .map(|p| p.display().to_string())
        })
        .ok_or_else(|| anyhow::anyhow!("No frame recording given (use --frames or a config file)"))?;

    let presenter_mode = match args.gui.as_str() {
        "none" => PresenterMode::None,
        _ => PresenterMode::Terminal,
    };

    let config = AppConfig {
        frame_input: FrameInput::File(frames_path),
        presenter_mode,
        realtime: args.realtime || config_file.as_ref().is_some_and(|c| c.playback.realtime),
        target_fps: args.fps,
    };

    // Create and run application
    let mut app = EmotionApp::new(config)?;
    app.run()?;

    Ok(())
}
