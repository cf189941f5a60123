//! Marquee is a deterministic motion engine for infinite scrolling text strips.
//!
//! Each track holds an unbounded position that advances at a signed base speed, scaled by a
//! multiplier derived from page-scroll velocity. The position is folded into `[-width, 0)` for
//! display, so repeated content appears to scroll forever without a seam.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: raw scroll velocity (or scroll positions, via [`ScrollVelocityTracker`]) sets the
//!    target of a [`DampedSignalFilter`].
//! 2. **Smooth**: once per frame the spring steps toward the target.
//! 3. **Map**: [`VelocityFactorMapper`] turns the smoothed velocity into a `1 + |factor|` multiplier.
//! 4. **Integrate**: every measured [`Track`] advances and wraps; unmeasured tracks stay frozen.
//!
//! The engine renders nothing. Hosts drive [`MarqueeEngine`] from their frame loop and apply the
//! published offsets as horizontal translations; [`simulate`] drives it from a JSON [`Scenario`].
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs produce identical outputs, frame for frame.
//! - **Never fails at runtime**: malformed deltas, samples and widths are discarded; only
//!   construction reports errors.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod foundation;
mod marquee;
mod motion;
mod sim;

pub use animation::ease::Ease;
pub use animation::spring::{DampedSignalFilter, FilterState, SpringConfig};
pub use config::builder::{MarqueeConfigBuilder, TrackBuilder};
pub use config::model::{IntroConfig, MarqueeConfig, TrackConfig};
pub use foundation::core::{Fps, FrameIndex, sanitize_dt};
pub use foundation::error::{MarqueeError, MarqueeResult};
pub use foundation::math::{remap, wrap};
pub use marquee::content::TrackContent;
pub use marquee::engine::{FrameOutput, MarqueeEngine, TrackFrame};
pub use marquee::track::{Track, TrackId, TrackPhase};
pub use motion::factor::{FactorConfig, VelocityFactorMapper};
pub use motion::integrator::WrapIntegrator;
pub use motion::velocity::{ScrollVelocityTracker, VelocityTrackerConfig};
pub use sim::runner::{SimulateOpts, simulate, simulate_with_opts};
pub use sim::scenario::{Scenario, ScrollEvent, VelocityEvent, WidthEvent};
