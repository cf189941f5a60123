//! Shared primitives: errors, frame timing, and scalar math.

/// Frame indices, frame rates and delta sanitizing.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Wrap-around and interpolation helpers.
pub mod math;
