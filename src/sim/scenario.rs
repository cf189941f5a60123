use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::{
    core::{Fps, FrameIndex},
    error::{MarqueeError, MarqueeResult},
};

/// Synthetic host input for an offline run: a fixed frame rate plus timed width, velocity and
/// scroll events.
///
/// Events scheduled for frame `n` are delivered before the engine processes frame `n`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scenario {
    /// Tick rate of the simulated frame loop.
    #[serde(default)]
    pub fps: Fps,
    /// Number of frames to simulate.
    pub frames: u64,
    /// Width measurements.
    #[serde(default)]
    pub widths: Vec<WidthEvent>,
    /// Raw scroll-velocity samples.
    #[serde(default)]
    pub velocity: Vec<VelocityEvent>,
    /// Raw scroll positions; velocity is derived from consecutive positions.
    #[serde(default)]
    pub scroll: Vec<ScrollEvent>,
}

/// A width measurement for one track.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WidthEvent {
    /// Frame the measurement lands on.
    pub frame: FrameIndex,
    /// Track name.
    pub track: String,
    /// Measured segment width in pixels.
    pub width_px: f64,
}

/// A raw scroll-velocity sample.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VelocityEvent {
    /// Frame the sample lands on.
    pub frame: FrameIndex,
    /// Velocity in px/s.
    pub value: f64,
}

/// A raw scroll position, timestamped at the start of its frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollEvent {
    /// Frame the position lands on.
    pub frame: FrameIndex,
    /// Vertical scroll position in pixels.
    pub y_px: f64,
}

impl Scenario {
    /// Empty scenario of `frames` frames at `fps`.
    pub fn new(fps: Fps, frames: u64) -> Self {
        Self {
            fps,
            frames,
            widths: Vec::new(),
            velocity: Vec::new(),
            scroll: Vec::new(),
        }
    }

    /// Parse a scenario from JSON text.
    pub fn from_json_str(s: &str) -> MarqueeResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| MarqueeError::serde(format!("parse scenario JSON: {e}")))
    }

    /// Parse a scenario from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MarqueeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MarqueeError::validation(format!("open scenario JSON '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            MarqueeError::serde(format!("parse scenario JSON '{}': {e}", path.display()))
        })
    }

    /// Validate frame rate and event frames. Track names are checked against the engine at run
    /// time.
    pub fn validate(&self) -> MarqueeResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        let frames = self
            .widths
            .iter()
            .map(|e| e.frame)
            .chain(self.velocity.iter().map(|e| e.frame))
            .chain(self.scroll.iter().map(|e| e.frame));
        for frame in frames {
            if frame.0 >= self.frames {
                return Err(MarqueeError::validation(format!(
                    "event at frame {} is outside the {}-frame scenario",
                    frame.0, self.frames
                )));
            }
        }
        Ok(())
    }
}
