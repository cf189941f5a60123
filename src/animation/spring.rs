use crate::foundation::core::sanitize_dt;
use crate::foundation::error::{MarqueeError, MarqueeResult};

/// Mass-spring-damper parameters for [`DampedSignalFilter`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Damping coefficient `c` (> 0).
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Spring stiffness `k` (> 0).
    #[serde(default = "default_stiffness")]
    pub stiffness: f64,
    /// Moving mass `m` (> 0).
    #[serde(default = "default_mass")]
    pub mass: f64,
}

fn default_damping() -> f64 {
    50.0
}

fn default_stiffness() -> f64 {
    400.0
}

fn default_mass() -> f64 {
    1.0
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            stiffness: default_stiffness(),
            mass: default_mass(),
        }
    }
}

impl SpringConfig {
    /// Validate that every coefficient is finite and strictly positive.
    pub fn validate(&self) -> MarqueeResult<()> {
        for (name, value) in [
            ("damping", self.damping),
            ("stiffness", self.stiffness),
            ("mass", self.mass),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MarqueeError::config(format!(
                    "spring {name} must be finite and > 0 (got {value})"
                )));
            }
        }
        Ok(())
    }

    /// Damping at which the spring stops oscillating: `2 * sqrt(k * m)`.
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Damping ratio `zeta = c / (2 * sqrt(k * m))`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / self.critical_damping()
    }
}

/// Two-variable state of the filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct FilterState {
    /// Smoothed output.
    pub value: f64,
    /// Rate of change of `value` (units per second).
    pub velocity: f64,
}

/// Second-order smoothing filter for a noisy scalar stream.
///
/// Each step integrates `m*x'' = -k*(x - target) - c*x'` exactly over `dt`, holding the target
/// constant for the duration of the step. The closed form decays for any `dt`, so frame hitches
/// cannot destabilize the output, and a critically or over-damped configuration approaches a
/// step input without crossing it.
#[derive(Clone, Debug)]
pub struct DampedSignalFilter {
    config: SpringConfig,
    state: FilterState,
    target: f64,
}

impl DampedSignalFilter {
    /// Build a filter at rest at zero.
    #[tracing::instrument]
    pub fn new(config: SpringConfig) -> MarqueeResult<Self> {
        config.validate()?;
        if config.damping_ratio() < 1.0 {
            tracing::warn!(
                damping = config.damping,
                critical = config.critical_damping(),
                "spring is underdamped; smoothed velocity will oscillate"
            );
        }
        Ok(Self {
            config,
            state: FilterState::default(),
            target: 0.0,
        })
    }

    /// Spring parameters.
    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> FilterState {
        self.state
    }

    /// Current smoothed value.
    pub fn value(&self) -> f64 {
        self.state.value
    }

    /// Latest accepted raw sample.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether the configuration cannot overshoot a step input.
    pub fn is_overdamped_or_critical(&self) -> bool {
        self.config.damping_ratio() >= 1.0
    }

    /// Accept a raw sample as the new target. Non-finite samples are ignored.
    pub fn set_target(&mut self, raw: f64) {
        if raw.is_finite() {
            self.target = raw;
        }
    }

    /// Feed `raw` and advance by `dt_secs`, returning the smoothed value.
    pub fn update(&mut self, raw: f64, dt_secs: f64) -> f64 {
        self.set_target(raw);
        self.step(dt_secs)
    }

    /// Advance toward the current target by `dt_secs`, returning the smoothed value.
    ///
    /// A zero (or malformed) step leaves the state untouched.
    pub fn step(&mut self, dt_secs: f64) -> f64 {
        let dt = sanitize_dt(dt_secs);
        if dt == 0.0 {
            return self.state.value;
        }

        let (offset, velocity) = self.solve(self.state.value - self.target, self.state.velocity, dt);
        if offset.is_finite() && velocity.is_finite() {
            self.state = FilterState {
                value: self.target + offset,
                velocity,
            };
        } else {
            // Only reachable through overflow of extreme samples; settle rather than poison.
            self.state = FilterState {
                value: self.target,
                velocity: 0.0,
            };
        }
        self.state.value
    }

    /// Whether both the distance to target and the velocity are below `epsilon`.
    pub fn is_settled(&self, epsilon: f64) -> bool {
        (self.state.value - self.target).abs() < epsilon && self.state.velocity.abs() < epsilon
    }

    /// Snap to `value` at rest, with the target at the same value.
    pub fn reset(&mut self, value: f64) {
        let value = if value.is_finite() { value } else { 0.0 };
        self.state = FilterState {
            value,
            velocity: 0.0,
        };
        self.target = value;
    }

    /// Closed-form displacement and velocity after `t` seconds, starting from `x0` / `v0`
    /// relative to the target.
    fn solve(&self, x0: f64, v0: f64, t: f64) -> (f64, f64) {
        let SpringConfig {
            damping,
            stiffness,
            mass,
        } = self.config;
        let w0 = (stiffness / mass).sqrt();
        let zeta = damping / (2.0 * (stiffness * mass).sqrt());

        if (zeta - 1.0).abs() < 1e-9 {
            let e = (-w0 * t).exp();
            let b = v0 + w0 * x0;
            let x = e * (x0 + b * t);
            let v = e * (b - w0 * (x0 + b * t));
            (x, v)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = zeta * w0;
            let e = (-decay * t).exp();
            let (sin, cos) = (wd * t).sin_cos();
            let b = (v0 + decay * x0) / wd;
            let x = e * (x0 * cos + b * sin);
            let v = e * ((b * wd - decay * x0) * cos - (x0 * wd + decay * b) * sin);
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            let a = (v0 - r2 * x0) / (r1 - r2);
            let b = x0 - a;
            let e1 = (r1 * t).exp();
            let e2 = (r2 * t).exp();
            (a * e1 + b * e2, a * r1 * e1 + b * r2 * e2)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
