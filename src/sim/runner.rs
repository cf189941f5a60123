use crate::{
    config::model::MarqueeConfig,
    foundation::error::{MarqueeError, MarqueeResult},
    marquee::engine::{FrameOutput, MarqueeEngine},
    sim::scenario::Scenario,
};

/// Options for [`simulate_with_opts`].
#[derive(Clone, Copy, Debug)]
pub struct SimulateOpts {
    /// Keep every `every`-th frame in the output (the last frame is always kept).
    pub every: u64,
}

impl Default for SimulateOpts {
    fn default() -> Self {
        Self { every: 1 }
    }
}

/// Run `scenario` against a fresh engine and collect the output of every frame.
pub fn simulate(config: &MarqueeConfig, scenario: &Scenario) -> MarqueeResult<Vec<FrameOutput>> {
    simulate_with_opts(config, scenario, SimulateOpts::default())
}

/// Run `scenario` against a fresh engine, one fixed tick per frame.
#[tracing::instrument(skip(config, scenario), fields(frames = scenario.frames))]
pub fn simulate_with_opts(
    config: &MarqueeConfig,
    scenario: &Scenario,
    opts: SimulateOpts,
) -> MarqueeResult<Vec<FrameOutput>> {
    scenario.validate()?;
    if opts.every == 0 {
        return Err(MarqueeError::validation("simulate every must be >= 1"));
    }

    let mut engine = MarqueeEngine::new(config.clone())?;
    let widths = scenario
        .widths
        .iter()
        .map(|e| {
            engine
                .track_id(&e.track)
                .map(|id| (e.frame, id, e.width_px))
                .ok_or_else(|| {
                    MarqueeError::validation(format!(
                        "width event references unknown track '{}'",
                        e.track
                    ))
                })
        })
        .collect::<MarqueeResult<Vec<_>>>()?;

    let dt = scenario.fps.frame_duration_secs();
    let mut out = Vec::with_capacity(output_capacity(scenario.frames, opts.every));
    for frame in 0..scenario.frames {
        for &(_, id, width) in widths.iter().filter(|(f, _, _)| f.0 == frame) {
            engine.set_track_width(id, width)?;
        }
        for event in scenario.velocity.iter().filter(|e| e.frame.0 == frame) {
            engine.on_velocity_sample(event.value);
        }
        let t = scenario.fps.frames_to_secs(frame);
        for event in scenario.scroll.iter().filter(|e| e.frame.0 == frame) {
            engine.on_scroll_position(event.y_px, t);
        }

        engine.on_frame(dt);
        if frame % opts.every == 0 || frame + 1 == scenario.frames {
            out.push(engine.snapshot());
        }
    }

    tracing::debug!(kept = out.len(), "simulation finished");
    Ok(out)
}

/// Upper bound of kept frames, capped so a huge frame count cannot trigger a giant allocation.
fn output_capacity(frames: u64, every: u64) -> usize {
    const MAX_PREALLOCATED_FRAMES: u64 = 1 << 20;
    (frames / every).saturating_add(1).min(MAX_PREALLOCATED_FRAMES) as usize
}

#[cfg(test)]
#[path = "../../tests/unit/sim/runner.rs"]
mod tests;
