/// Map `v` into the half-open cycle `[min, max)`.
///
/// Negative dividends wrap forward, so a value sliding below `min` reappears just under `max`
/// instead of snapping. Returns `min` when the range is empty, inverted or non-finite.
pub fn wrap(min: f64, max: f64, v: f64) -> f64 {
    let range = max - min;
    if !(range.is_finite() && range > 0.0) || !v.is_finite() {
        return min;
    }
    let mut m = (v - min).rem_euclid(range);
    // rem_euclid may round up to exactly `range` for tiny negative remainders.
    if m >= range {
        m = 0.0;
    }
    let w = m + min;
    // Adding `min` back can round up to `max` when the bounds are not exactly representable.
    if w >= max { min } else { w }
}

/// Linear interpolation of `v` from `[d0, d1]` into `[r0, r1]`.
///
/// Values outside the domain extrapolate; callers clamp if they need to. A degenerate domain
/// yields `r0`.
pub fn remap(v: f64, (d0, d1): (f64, f64), (r0, r1): (f64, f64)) -> f64 {
    let span = d1 - d0;
    if span == 0.0 {
        return r0;
    }
    r0 + (v - d0) / span * (r1 - r0)
}
