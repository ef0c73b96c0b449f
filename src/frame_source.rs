//! Frame sources delivering per-tick face-tracking results.
//!
//! The live face tracker is an external collaborator; this module defines
//! the boundary it delivers frames across, plus a replay source that reads
//! recorded frames from a JSON-lines file so the pipeline can run without
//! a camera or tracking model.

use crate::blendshapes::BlendshapeSet;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One face-tracking result for one video frame.
///
/// `blendshapes` is `None` when no face was detected this frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedFrame {
    /// Video timestamp of the frame in milliseconds
    pub timestamp_ms: f64,

    /// Blendshape scores for the first detected face, if any
    #[serde(default)]
    pub blendshapes: Option<BlendshapeSet>,
}

/// Source of tracked frames, one per scheduler tick
pub trait FrameSource {
    /// Next frame in delivery order, or `Ok(None)` when the stream ends
    fn next_frame(&mut self) -> Result<Option<TrackedFrame>>;
}

/// Replays tracked frames from a JSON-lines reader.
///
/// Each non-empty line is one `TrackedFrame` record. Frames are yielded in
/// file order; a malformed line is a frame source error, not a classifier
/// error.
pub struct ReplaySource<R: BufRead> {
    reader: R,
    line: String,
    line_number: usize,
}

impl ReplaySource<BufReader<File>> {
    /// Open a recorded frame file for replay
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|e| {
            Error::FrameSource(format!("cannot open {}: {}", path.as_ref().display(), e))
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> ReplaySource<R> {
    /// Replay frames from any buffered reader
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
        }
    }
}

impl<R: BufRead> FrameSource for ReplaySource<R> {
    fn next_frame(&mut self) -> Result<Option<TrackedFrame>> {
        loop {
            self.line.clear();
            let read = self.reader.read_line(&mut self.line)?;
            if read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let trimmed = self.line.trim();
            if trimmed.is_empty() {
                continue;
            }

            return serde_json::from_str(trimmed).map(Some).map_err(|e| {
                Error::FrameSource(format!("bad frame record on line {}: {}", self.line_number, e))
            });
        }
    }
}
