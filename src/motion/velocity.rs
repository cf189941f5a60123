use crate::foundation::core::sanitize_dt;
use crate::foundation::error::{MarqueeError, MarqueeResult};

/// Settings for [`ScrollVelocityTracker`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VelocityTrackerConfig {
    /// Longest gap between scroll positions that still counts as one continuous movement.
    #[serde(default = "default_max_sample_gap_secs")]
    pub max_sample_gap_secs: f64,
}

fn default_max_sample_gap_secs() -> f64 {
    0.03
}

impl Default for VelocityTrackerConfig {
    fn default() -> Self {
        Self {
            max_sample_gap_secs: default_max_sample_gap_secs(),
        }
    }
}

impl VelocityTrackerConfig {
    /// Validate that the gap is finite and positive.
    pub fn validate(&self) -> MarqueeResult<()> {
        if !self.max_sample_gap_secs.is_finite() || self.max_sample_gap_secs <= 0.0 {
            return Err(MarqueeError::config(
                "velocity max_sample_gap_secs must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
struct ScrollSample {
    y: f64,
    t: f64,
}

/// Derives a raw scroll velocity (px/s) from timestamped scroll positions.
///
/// The divisor is capped at `max_sample_gap_secs`, so the first movement after a pause reads as a
/// burst rather than a crawl. Once no position arrives for longer than the gap the velocity drops
/// back to zero.
#[derive(Clone, Debug)]
pub struct ScrollVelocityTracker {
    config: VelocityTrackerConfig,
    last: Option<ScrollSample>,
    velocity: f64,
    since_last: f64,
}

impl ScrollVelocityTracker {
    /// Build an idle tracker.
    pub fn new(config: VelocityTrackerConfig) -> MarqueeResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            last: None,
            velocity: 0.0,
            since_last: 0.0,
        })
    }

    /// Latest derived velocity.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Record a scroll position observed at `timestamp_secs`.
    ///
    /// Returns the derived velocity, or `None` when the sample is malformed (non-finite, or older
    /// than the previous one) and was dropped.
    pub fn push(&mut self, y_px: f64, timestamp_secs: f64) -> Option<f64> {
        if !y_px.is_finite() || !timestamp_secs.is_finite() {
            return None;
        }
        let sample = ScrollSample {
            y: y_px,
            t: timestamp_secs,
        };
        let velocity = match self.last {
            None => 0.0,
            Some(prev) if sample.t < prev.t => return None,
            // Same instant: keep the earlier anchor so the next delta spans both moves.
            Some(prev) if sample.t == prev.t => {
                self.since_last = 0.0;
                return Some(self.velocity);
            }
            Some(prev) => {
                let dt = (sample.t - prev.t).min(self.config.max_sample_gap_secs);
                (sample.y - prev.y) / dt
            }
        };
        self.last = Some(sample);
        self.velocity = if velocity.is_finite() { velocity } else { 0.0 };
        self.since_last = 0.0;
        Some(self.velocity)
    }

    /// Advance the staleness clock by one frame.
    ///
    /// Returns `Some(0.0)` on the frame where a moving velocity goes stale.
    pub fn tick(&mut self, dt_secs: f64) -> Option<f64> {
        self.since_last += sanitize_dt(dt_secs);
        if self.velocity != 0.0 && self.since_last > self.config.max_sample_gap_secs {
            self.velocity = 0.0;
            return Some(0.0);
        }
        None
    }
}
