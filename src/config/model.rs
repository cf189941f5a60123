use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use crate::{
    animation::{ease::Ease, spring::SpringConfig},
    foundation::error::{MarqueeError, MarqueeResult},
    motion::{factor::FactorConfig, velocity::VelocityTrackerConfig},
};

/// Complete engine configuration, fixed at construction.
///
/// The model is plain serde data: it can be built programmatically (see
/// [`crate::MarqueeConfigBuilder`]) or loaded from JSON. Every field has a default, so `{}` is a
/// valid configuration describing the stock two-track marquee.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarqueeConfig {
    /// Scroll-velocity smoothing spring.
    #[serde(default)]
    pub spring: SpringConfig,
    /// Smoothed velocity to speed factor mapping.
    #[serde(default)]
    pub factor: FactorConfig,
    /// Scroll position to velocity derivation.
    #[serde(default)]
    pub velocity: VelocityTrackerConfig,
    /// Entrance fade; `null` shows the marquee fully opaque from the first frame.
    #[serde(default = "default_intro")]
    pub intro: Option<IntroConfig>,
    /// Viewport width used to check that every track repeats its content enough.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport_px: Option<f64>,
    /// Tracks in display order.
    #[serde(default = "default_tracks")]
    pub tracks: Vec<TrackConfig>,
}

/// One scrolling line.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackConfig {
    /// Unique track name.
    pub name: String,
    /// Signed base speed; negative scrolls left, positive scrolls right.
    pub base_speed_px_per_sec: f64,
    /// Item labels, rendered left to right.
    #[serde(default)]
    pub items: Vec<String>,
    /// Separator placed between items and after the last one.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Number of copies of the joined items rendered side by side.
    #[serde(default = "default_repeat_count")]
    pub repeat_count: u32,
}

/// Opacity ramp applied from the first frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IntroConfig {
    /// Fade duration in seconds.
    #[serde(default = "default_intro_duration_secs")]
    pub duration_secs: f64,
    /// Easing applied to fade progress.
    #[serde(default)]
    pub ease: Ease,
}

const DEFAULT_SPEED_PX_PER_SEC: f64 = 50.0;

fn default_separator() -> String {
    " | ".to_string()
}

fn default_repeat_count() -> u32 {
    6
}

fn default_intro_duration_secs() -> f64 {
    0.8
}

fn default_intro() -> Option<IntroConfig> {
    Some(IntroConfig::default())
}

fn default_tracks() -> Vec<TrackConfig> {
    vec![
        TrackConfig::new("left", -DEFAULT_SPEED_PX_PER_SEC),
        TrackConfig::new("right", DEFAULT_SPEED_PX_PER_SEC),
    ]
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_intro_duration_secs(),
            ease: Ease::default(),
        }
    }
}

impl TrackConfig {
    /// Track with no items and the default separator and repeat count.
    pub fn new(name: impl Into<String>, base_speed_px_per_sec: f64) -> Self {
        Self {
            name: name.into(),
            base_speed_px_per_sec,
            items: Vec::new(),
            separator: default_separator(),
            repeat_count: default_repeat_count(),
        }
    }
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            spring: SpringConfig::default(),
            factor: FactorConfig::default(),
            velocity: VelocityTrackerConfig::default(),
            intro: default_intro(),
            viewport_px: None,
            tracks: default_tracks(),
        }
    }
}

impl MarqueeConfig {
    /// The stock layout: a `left` track scrolling left and a `right` track scrolling right.
    pub fn two_track(left_items: Vec<String>, right_items: Vec<String>) -> Self {
        let mut cfg = Self::default();
        cfg.tracks[0].items = left_items;
        cfg.tracks[1].items = right_items;
        cfg
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(s: &str) -> MarqueeResult<Self> {
        serde_json::from_str(s).map_err(|e| MarqueeError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MarqueeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MarqueeError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            MarqueeError::serde(format!("parse config JSON '{}': {e}", path.display()))
        })
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> MarqueeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MarqueeError::serde(e.to_string()))
    }

    /// Validate every invariant the engine relies on.
    pub fn validate(&self) -> MarqueeResult<()> {
        self.spring.validate()?;
        self.factor.validate()?;
        self.velocity.validate()?;

        if let Some(intro) = &self.intro {
            if !intro.duration_secs.is_finite() || intro.duration_secs <= 0.0 {
                return Err(MarqueeError::config(
                    "intro duration_secs must be finite and > 0",
                ));
            }
            if !intro.ease.is_valid() {
                return Err(MarqueeError::config(
                    "intro ease control points must have x in [0, 1]",
                ));
            }
        }
        if let Some(viewport) = self.viewport_px
            && (!viewport.is_finite() || viewport < 0.0)
        {
            return Err(MarqueeError::config("viewport_px must be finite and >= 0"));
        }

        if self.tracks.is_empty() {
            return Err(MarqueeError::config("at least one track is required"));
        }
        let mut names = BTreeSet::new();
        for track in &self.tracks {
            if track.name.is_empty() {
                return Err(MarqueeError::config("track name must not be empty"));
            }
            if !names.insert(track.name.as_str()) {
                return Err(MarqueeError::config(format!(
                    "duplicate track name '{}'",
                    track.name
                )));
            }
            if !track.base_speed_px_per_sec.is_finite() {
                return Err(MarqueeError::config(format!(
                    "track '{}' base_speed_px_per_sec must be finite",
                    track.name
                )));
            }
            if track.repeat_count == 0 {
                return Err(MarqueeError::config(format!(
                    "track '{}' repeat_count must be >= 1",
                    track.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
