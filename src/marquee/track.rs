use crate::{
    config::model::TrackConfig,
    foundation::error::MarqueeResult,
    marquee::content::TrackContent,
    motion::integrator::WrapIntegrator,
};

/// Index of a track inside its engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TrackId(pub usize);

/// Measurement lifecycle of a track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackPhase {
    /// No width has been reported yet.
    Unmeasured,
    /// A width was reported but it was zero; layout has not settled.
    Measuring,
    /// Width is known and the track advances every frame.
    Active,
}

/// One independently animated line of repeating content.
#[derive(Clone, Debug)]
pub struct Track {
    name: String,
    content: TrackContent,
    integrator: WrapIntegrator,
    width_px: f64,
    phase: TrackPhase,
    offset_px: f64,
}

impl Track {
    /// Build a track at position 0, unmeasured.
    pub fn new(config: &TrackConfig) -> MarqueeResult<Self> {
        let content = TrackContent::new(
            config.items.clone(),
            config.separator.clone(),
            config.repeat_count,
        )?;
        Ok(Self {
            name: config.name.clone(),
            content,
            integrator: WrapIntegrator::new(config.base_speed_px_per_sec),
            width_px: 0.0,
            phase: TrackPhase::Unmeasured,
            offset_px: 0.0,
        })
    }

    /// Track name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rendered content.
    pub fn content(&self) -> &TrackContent {
        &self.content
    }

    /// Measurement phase.
    pub fn phase(&self) -> TrackPhase {
        self.phase
    }

    /// Width of one content segment in pixels (0 until measured).
    pub fn width_px(&self) -> f64 {
        self.width_px
    }

    /// Unbounded position in pixels.
    pub fn position_px(&self) -> f64 {
        self.integrator.position()
    }

    /// Signed base speed.
    pub fn base_speed_px_per_sec(&self) -> f64 {
        self.integrator.base_speed()
    }

    /// Offset published by the latest tick or measurement.
    pub fn offset_px(&self) -> f64 {
        self.offset_px
    }

    /// Record a new measured width.
    ///
    /// Negative or non-finite widths count as zero. The position is never touched: a resize only
    /// changes the wrap period, so the offset may move by at most the width delta once.
    pub fn set_width(&mut self, width_px: f64) {
        let width = if width_px.is_finite() && width_px > 0.0 {
            width_px
        } else {
            if width_px != 0.0 {
                tracing::warn!(track = %self.name, width_px, "discarding malformed width");
            }
            0.0
        };

        let next = if width > 0.0 {
            TrackPhase::Active
        } else {
            TrackPhase::Measuring
        };
        if next != self.phase {
            tracing::debug!(track = %self.name, from = ?self.phase, to = ?next, width, "track phase");
        } else if next == TrackPhase::Active && width != self.width_px {
            tracing::debug!(track = %self.name, old = self.width_px, new = width, "track resized");
        }

        self.phase = next;
        self.width_px = width;
        self.offset_px = self.integrator.display_offset(width);
    }

    /// Advance one frame and return the offset to apply.
    ///
    /// While the width is unknown the track is frozen at offset 0 and no time accrues.
    pub fn tick(&mut self, dt_secs: f64, speed_multiplier: f64) -> f64 {
        if self.phase == TrackPhase::Active {
            self.integrator.advance(dt_secs, speed_multiplier);
        }
        self.offset_px = self.integrator.display_offset(self.width_px);
        self.offset_px
    }
}

#[cfg(test)]
#[path = "../../tests/unit/marquee/track.rs"]
mod tests;
