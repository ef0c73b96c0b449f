//! Frame replay tests: recorded tracker output driving the full app loop

use emotion_mirror::app::{AppConfig, EmotionApp, FrameInput, PresenterMode};
use emotion_mirror::classifier::EmotionLabel;
use std::fs;
use std::path::PathBuf;

fn write_recording(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("emotion_mirror_{name}_{}.jsonl", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

fn headless_config(path: &PathBuf) -> AppConfig {
    AppConfig {
        frame_input: FrameInput::File(path.display().to_string()),
        presenter_mode: PresenterMode::None,
        realtime: false,
        target_fps: 30.0,
    }
}

#[test]
fn test_replay_ends_on_last_frame_emotion() {
    let recording = write_recording(
        "session",
        concat!(
            r#"{"timestamp_ms":0.0,"blendshapes":[{"categoryName":"mouthSmileLeft","score":0.8}]}"#,
            "\n",
            r#"{"timestamp_ms":33.3,"blendshapes":null}"#,
            "\n",
            r#"{"timestamp_ms":66.6,"blendshapes":[{"categoryName":"browDownLeft","score":0.6}]}"#,
            "\n",
        ),
    );

    let mut app = EmotionApp::new(headless_config(&recording)).unwrap();
    app.run().unwrap();
    assert_eq!(app.display_state().active(), EmotionLabel::Angry);

    fs::remove_file(recording).unwrap();
}

#[test]
fn test_stale_ticks_preserve_prior_state() {
    let recording = write_recording(
        "stale",
        concat!(
            r#"{"timestamp_ms":0.0,"blendshapes":[{"categoryName":"eyeWideLeft","score":0.5},{"categoryName":"eyeWideRight","score":0.5}]}"#,
            "\n",
            // Scheduler ticked again before a new frame arrived
            r#"{"timestamp_ms":0.0,"blendshapes":null}"#,
            "\n",
        ),
    );

    let mut app = EmotionApp::new(headless_config(&recording)).unwrap();
    app.run().unwrap();
    assert_eq!(app.display_state().active(), EmotionLabel::Surprised);

    fs::remove_file(recording).unwrap();
}

#[test]
fn test_corrupt_recording_is_reported_not_panicked() {
    let recording = write_recording(
        "corrupt",
        concat!(
            r#"{"timestamp_ms":0.0,"blendshapes":[{"categoryName":"mouthSmileLeft","score":0.8}]}"#,
            "\n",
            "garbage line\n",
        ),
    );

    let mut app = EmotionApp::new(headless_config(&recording)).unwrap();
    let result = app.run();
    assert!(result.is_err());
    // The frames before the corrupt record were still applied
    assert_eq!(app.display_state().active(), EmotionLabel::Happy);

    fs::remove_file(recording).unwrap();
}

#[test]
fn test_missing_recording_fails_at_startup() {
    let config = AppConfig {
        frame_input: FrameInput::File("/nonexistent/session.jsonl".to_string()),
        presenter_mode: PresenterMode::None,
        realtime: false,
        target_fps: 30.0,
    };
    assert!(EmotionApp::new(config).is_err());
}

#[test]
fn test_empty_recording_stays_neutral() {
    let recording = write_recording("empty", "");

    let mut app = EmotionApp::new(headless_config(&recording)).unwrap();
    app.run().unwrap();
    assert_eq!(app.display_state().active(), EmotionLabel::Neutral);

    fs::remove_file(recording).unwrap();
}
