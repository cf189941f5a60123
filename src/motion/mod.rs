//! Scroll-velocity derived motion: velocity tracking, speed factor, position integration.

/// Speed factor mapping.
pub mod factor;
/// Wrap-around position integrator.
pub mod integrator;
/// Scroll position to velocity.
pub mod velocity;
