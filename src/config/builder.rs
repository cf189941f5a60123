use crate::{
    animation::{ease::Ease, spring::SpringConfig},
    config::model::{IntroConfig, MarqueeConfig, TrackConfig},
    foundation::error::{MarqueeError, MarqueeResult},
    motion::{factor::FactorConfig, velocity::VelocityTrackerConfig},
};

/// Fluent builder for [`MarqueeConfig`]; [`MarqueeConfigBuilder::build`] validates.
#[derive(Clone, Debug)]
pub struct MarqueeConfigBuilder {
    spring: SpringConfig,
    factor: FactorConfig,
    velocity: VelocityTrackerConfig,
    intro: Option<IntroConfig>,
    viewport_px: Option<f64>,
    tracks: Vec<TrackConfig>,
}

impl Default for MarqueeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MarqueeConfigBuilder {
    /// Start from stock spring/factor settings and no tracks.
    pub fn new() -> Self {
        let stock = MarqueeConfig::default();
        Self {
            spring: stock.spring,
            factor: stock.factor,
            velocity: stock.velocity,
            intro: stock.intro,
            viewport_px: None,
            tracks: Vec::new(),
        }
    }

    /// Spring damping and stiffness (mass stays at its current value).
    pub fn spring(mut self, damping: f64, stiffness: f64) -> Self {
        self.spring.damping = damping;
        self.spring.stiffness = stiffness;
        self
    }

    /// Spring mass.
    pub fn mass(mut self, mass: f64) -> Self {
        self.spring.mass = mass;
        self
    }

    /// Velocity domain mapped onto the factor range.
    pub fn factor(mut self, domain: [f64; 2], range: [f64; 2], clamp: bool) -> Self {
        self.factor = FactorConfig {
            domain,
            range,
            clamp,
        };
        self
    }

    /// Scroll sample gap after which velocity reads as zero.
    pub fn max_sample_gap_secs(mut self, secs: f64) -> Self {
        self.velocity.max_sample_gap_secs = secs;
        self
    }

    /// Entrance fade.
    pub fn intro(mut self, duration_secs: f64, ease: Ease) -> Self {
        self.intro = Some(IntroConfig {
            duration_secs,
            ease,
        });
        self
    }

    /// Disable the entrance fade.
    pub fn no_intro(mut self) -> Self {
        self.intro = None;
        self
    }

    /// Viewport width used for the repeat-count coverage check.
    pub fn viewport_px(mut self, width: f64) -> Self {
        self.viewport_px = Some(width);
        self
    }

    /// Append a track; names must be unique.
    pub fn track(mut self, track: TrackConfig) -> MarqueeResult<Self> {
        if self.tracks.iter().any(|t| t.name == track.name) {
            return Err(MarqueeError::config(format!(
                "duplicate track name '{}'",
                track.name
            )));
        }
        self.tracks.push(track);
        Ok(self)
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> MarqueeResult<MarqueeConfig> {
        let cfg = MarqueeConfig {
            spring: self.spring,
            factor: self.factor,
            velocity: self.velocity,
            intro: self.intro,
            viewport_px: self.viewport_px,
            tracks: self.tracks,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Fluent builder for [`TrackConfig`].
#[derive(Clone, Debug)]
pub struct TrackBuilder {
    track: TrackConfig,
}

impl TrackBuilder {
    /// Track named `name` moving at `base_speed_px_per_sec`.
    pub fn new(name: impl Into<String>, base_speed_px_per_sec: f64) -> Self {
        Self {
            track: TrackConfig::new(name, base_speed_px_per_sec),
        }
    }

    /// Append an item label.
    pub fn item(mut self, label: impl Into<String>) -> Self {
        self.track.items.push(label.into());
        self
    }

    /// Append several item labels.
    pub fn items<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.track.items.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Separator between items.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.track.separator = separator.into();
        self
    }

    /// Number of rendered copies.
    pub fn repeat_count(mut self, count: u32) -> Self {
        self.track.repeat_count = count;
        self
    }

    /// Finish without validation; [`MarqueeConfigBuilder::build`] validates the whole config.
    pub fn build(self) -> TrackConfig {
        self.track
    }
}
