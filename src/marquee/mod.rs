//! Tracks and the frame-driven engine that owns them.

/// Repeated label content.
pub mod content;
/// Host-facing engine.
pub mod engine;
/// Single track state.
pub mod track;
