//! Time-based curves and filters.

/// Easing curves.
pub mod ease;
/// Damped spring filter.
pub mod spring;
