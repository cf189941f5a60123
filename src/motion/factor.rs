use crate::foundation::error::{MarqueeError, MarqueeResult};
use crate::foundation::math::remap;

/// Domain/range bounds for [`VelocityFactorMapper`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FactorConfig {
    /// Input bounds `[lo, hi]` of the smoothed velocity (px/s).
    #[serde(default = "default_domain")]
    pub domain: [f64; 2],
    /// Output bounds `[lo, hi]` of the factor.
    #[serde(default = "default_range")]
    pub range: [f64; 2],
    /// Clamp the factor into `range` instead of extrapolating past it.
    #[serde(default)]
    pub clamp: bool,
}

fn default_domain() -> [f64; 2] {
    [0.0, 1000.0]
}

fn default_range() -> [f64; 2] {
    [0.0, 5.0]
}

impl Default for FactorConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            range: default_range(),
            clamp: false,
        }
    }
}

impl FactorConfig {
    /// Validate bounds: all finite, domain non-degenerate.
    pub fn validate(&self) -> MarqueeResult<()> {
        if self
            .domain
            .iter()
            .chain(self.range.iter())
            .any(|v| !v.is_finite())
        {
            return Err(MarqueeError::config("factor domain/range bounds must be finite"));
        }
        if self.domain[0] == self.domain[1] {
            return Err(MarqueeError::config(
                "factor domain must span a non-empty interval",
            ));
        }
        Ok(())
    }
}

/// Rescales the smoothed scroll velocity into a speed multiplier.
#[derive(Clone, Copy, Debug)]
pub struct VelocityFactorMapper {
    config: FactorConfig,
}

impl VelocityFactorMapper {
    /// Build a mapper, rejecting degenerate bounds.
    pub fn new(config: FactorConfig) -> MarqueeResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Bounds in use.
    pub fn config(&self) -> &FactorConfig {
        &self.config
    }

    /// Map `smoothed` from the domain into the range.
    ///
    /// Without clamping, fast scrolling keeps pushing the factor past the range bounds.
    pub fn map_to_factor(&self, smoothed: f64) -> f64 {
        let [d0, d1] = self.config.domain;
        let [r0, r1] = self.config.range;
        let factor = remap(smoothed, (d0, d1), (r0, r1));
        if self.config.clamp {
            factor.clamp(r0.min(r1), r0.max(r1))
        } else {
            factor
        }
    }

    /// Speed multiplier `1 + |factor|`; scrolling either way speeds the marquee up.
    pub fn multiplier(&self, smoothed: f64) -> f64 {
        let m = 1.0 + self.map_to_factor(smoothed).abs();
        if m.is_finite() { m } else { 1.0 }
    }
}
