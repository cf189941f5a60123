use crate::foundation::core::sanitize_dt;
use crate::foundation::math::wrap;

/// Unbounded scalar position advanced at a signed base speed.
///
/// The position itself never wraps; only [`WrapIntegrator::display_offset`] folds it into the
/// visible cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrapIntegrator {
    base_speed_px_per_sec: f64,
    position: f64,
}

impl WrapIntegrator {
    /// Start at position 0 moving at `base_speed_px_per_sec` (sign = direction).
    pub fn new(base_speed_px_per_sec: f64) -> Self {
        Self {
            base_speed_px_per_sec,
            position: 0.0,
        }
    }

    /// Signed base speed.
    pub fn base_speed(&self) -> f64 {
        self.base_speed_px_per_sec
    }

    /// Current unbounded position in pixels.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// `position += base_speed * dt * multiplier`.
    ///
    /// Malformed deltas advance nothing; a non-finite multiplier falls back to 1.
    pub fn advance(&mut self, dt_secs: f64, speed_multiplier: f64) {
        let dt = sanitize_dt(dt_secs);
        let multiplier = if speed_multiplier.is_finite() {
            speed_multiplier
        } else {
            1.0
        };
        let next = self.position + self.base_speed_px_per_sec * dt * multiplier;
        if next.is_finite() {
            self.position = next;
        }
    }

    /// Offset in `[-width, 0)` for a positive width, `0.0` otherwise.
    pub fn display_offset(&self, width_px: f64) -> f64 {
        if !(width_px.is_finite() && width_px > 0.0) {
            return 0.0;
        }
        wrap(-width_px, 0.0, self.position)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/integrator.rs"]
mod tests;
