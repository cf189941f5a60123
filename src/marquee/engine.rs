use crate::{
    animation::spring::DampedSignalFilter,
    config::model::{IntroConfig, MarqueeConfig},
    foundation::core::sanitize_dt,
    foundation::error::{MarqueeError, MarqueeResult},
    marquee::track::{Track, TrackId, TrackPhase},
    motion::{factor::VelocityFactorMapper, velocity::ScrollVelocityTracker},
};

/// Per-track slice of a [`FrameOutput`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TrackFrame {
    /// Track name.
    pub name: String,
    /// Measurement phase after this frame.
    pub phase: TrackPhase,
    /// Unbounded position in pixels.
    pub position_px: f64,
    /// Measured segment width in pixels (0 while unmeasured).
    pub width_px: f64,
    /// Horizontal translation to apply, in `[-width_px, 0)` or 0 while unmeasured.
    pub offset_px: f64,
}

/// Everything a renderer needs after one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameOutput {
    /// Number of frames processed so far.
    pub frame: u64,
    /// Sum of sanitized frame deltas.
    pub elapsed_secs: f64,
    /// Smoothed scroll velocity (px/s).
    pub smoothed_velocity: f64,
    /// Velocity factor before the `1 + |factor|` combination.
    pub velocity_factor: f64,
    /// Speed multiplier applied to every track this frame.
    pub multiplier: f64,
    /// Entrance fade opacity in `[0, 1]`.
    pub opacity: f64,
    /// Tracks in configuration order.
    pub tracks: Vec<TrackFrame>,
}

/// Frame-driven marquee motion engine.
///
/// The host calls [`MarqueeEngine::on_frame`] once per rendered frame and feeds scroll input
/// through [`MarqueeEngine::on_velocity_sample`] or [`MarqueeEngine::on_scroll_position`] whenever
/// it arrives. Widths come from the layout collaborator via [`MarqueeEngine::set_track_width`].
/// One smoothed velocity drives every track; each track keeps its own position.
#[derive(Clone, Debug)]
pub struct MarqueeEngine {
    filter: DampedSignalFilter,
    mapper: VelocityFactorMapper,
    tracker: ScrollVelocityTracker,
    intro: Option<IntroConfig>,
    viewport_px: Option<f64>,
    tracks: Vec<Track>,
    frame: u64,
    elapsed_secs: f64,
    multiplier: f64,
}

impl MarqueeEngine {
    /// Build an engine, failing fast on misconfiguration.
    #[tracing::instrument(skip(config), fields(tracks = config.tracks.len()))]
    pub fn new(config: MarqueeConfig) -> MarqueeResult<Self> {
        config.validate()?;
        let filter = DampedSignalFilter::new(config.spring)?;
        let mapper = VelocityFactorMapper::new(config.factor)?;
        let tracker = ScrollVelocityTracker::new(config.velocity)?;
        let tracks = config
            .tracks
            .iter()
            .map(Track::new)
            .collect::<MarqueeResult<Vec<_>>>()?;

        let multiplier = mapper.multiplier(filter.value());
        Ok(Self {
            filter,
            mapper,
            tracker,
            intro: config.intro,
            viewport_px: config.viewport_px,
            tracks,
            frame: 0,
            elapsed_secs: 0.0,
            multiplier,
        })
    }

    /// Tracks in configuration order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Look up a track.
    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id.0)
    }

    /// Find a track by name.
    pub fn track_id(&self, name: &str) -> Option<TrackId> {
        self.tracks.iter().position(|t| t.name() == name).map(TrackId)
    }

    /// Current smoothed scroll velocity.
    pub fn smoothed_velocity(&self) -> f64 {
        self.filter.value()
    }

    /// Speed multiplier used by the latest frame.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Frames processed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Push a raw scroll-velocity sample (px/s). Non-finite samples are ignored.
    pub fn on_velocity_sample(&mut self, raw: f64) {
        self.filter.set_target(raw);
    }

    /// Push a raw scroll position; the derived velocity is fed to the filter.
    pub fn on_scroll_position(&mut self, y_px: f64, timestamp_secs: f64) {
        if let Some(v) = self.tracker.push(y_px, timestamp_secs) {
            self.on_velocity_sample(v);
        }
    }

    /// Report the measured width of one content segment for `id`.
    pub fn set_track_width(&mut self, id: TrackId, width_px: f64) -> MarqueeResult<()> {
        let viewport = self.viewport_px;
        let track = self.tracks.get_mut(id.0).ok_or_else(|| {
            MarqueeError::validation(format!("unknown track id {}", id.0))
        })?;
        track.set_width(width_px);

        if let Some(viewport) = viewport
            && track.phase() == TrackPhase::Active
            && !track.content().covers_viewport(track.width_px(), viewport)
        {
            tracing::warn!(
                track = %track.name(),
                width_px = track.width_px(),
                viewport,
                repeat_count = track.content().repeat_count(),
                "repeat count too low to hide the wrap boundary"
            );
        }
        Ok(())
    }

    /// Advance every track by one frame of `dt_secs`.
    ///
    /// Non-finite or negative deltas count as zero. Offsets are read back through
    /// [`MarqueeEngine::offset_px`] or [`MarqueeEngine::snapshot`].
    pub fn on_frame(&mut self, dt_secs: f64) {
        let dt = sanitize_dt(dt_secs);
        if let Some(v) = self.tracker.tick(dt) {
            self.on_velocity_sample(v);
        }

        let smoothed = self.filter.step(dt);
        self.multiplier = self.mapper.multiplier(smoothed);
        for track in &mut self.tracks {
            track.tick(dt, self.multiplier);
        }

        self.frame += 1;
        self.elapsed_secs += dt;
    }

    /// Offset to apply to `id` this frame, or `None` for an unknown track.
    pub fn offset_px(&self, id: TrackId) -> Option<f64> {
        self.track(id).map(Track::offset_px)
    }

    /// Entrance fade opacity at the current elapsed time.
    pub fn opacity(&self) -> f64 {
        match self.intro {
            Some(intro) => intro.ease.apply(self.elapsed_secs / intro.duration_secs),
            None => 1.0,
        }
    }

    /// Current outputs without advancing time.
    pub fn snapshot(&self) -> FrameOutput {
        let smoothed = self.filter.value();
        FrameOutput {
            frame: self.frame,
            elapsed_secs: self.elapsed_secs,
            smoothed_velocity: smoothed,
            velocity_factor: self.mapper.map_to_factor(smoothed),
            multiplier: self.multiplier,
            opacity: self.opacity(),
            tracks: self
                .tracks
                .iter()
                .map(|t| TrackFrame {
                    name: t.name().to_string(),
                    phase: t.phase(),
                    position_px: t.position_px(),
                    width_px: t.width_px(),
                    offset_px: t.offset_px(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/marquee/engine.rs"]
mod tests;
