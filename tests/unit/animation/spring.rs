use super::*;

fn filter(damping: f64, stiffness: f64) -> DampedSignalFilter {
    DampedSignalFilter::new(SpringConfig {
        damping,
        stiffness,
        mass: 1.0,
    })
    .unwrap()
}

#[test]
fn rejects_non_positive_coefficients() {
    for cfg in [
        SpringConfig {
            stiffness: 0.0,
            ..SpringConfig::default()
        },
        SpringConfig {
            damping: -1.0,
            ..SpringConfig::default()
        },
        SpringConfig {
            mass: 0.0,
            ..SpringConfig::default()
        },
        SpringConfig {
            stiffness: f64::NAN,
            ..SpringConfig::default()
        },
    ] {
        let err = DampedSignalFilter::new(cfg).unwrap_err();
        assert!(err.to_string().contains("config error:"));
    }
}

#[test]
fn default_config_is_overdamped() {
    let cfg = SpringConfig::default();
    assert_eq!(cfg.critical_damping(), 40.0);
    assert_eq!(cfg.damping_ratio(), 1.25);
    assert!(DampedSignalFilter::new(cfg).unwrap().is_overdamped_or_critical());
}

#[test]
fn zero_step_is_idempotent() {
    let mut f = filter(50.0, 400.0);
    f.update(800.0, 0.05);
    let before = f.state();
    assert_eq!(f.update(-3000.0, 0.0), before.value);
    assert_eq!(f.state(), before);
    assert_eq!(f.target(), -3000.0);
}

#[test]
fn non_finite_samples_keep_previous_target() {
    let mut f = filter(50.0, 400.0);
    f.update(100.0, 0.1);
    let state = f.state();
    f.set_target(f64::NAN);
    f.set_target(f64::INFINITY);
    assert_eq!(f.target(), 100.0);
    assert_eq!(f.state(), state);
    let v = f.update(f64::NEG_INFINITY, 0.1);
    assert!(v.is_finite());
    assert!(v > state.value);
    assert_eq!(f.target(), 100.0);
}

#[test]
fn malformed_dt_does_not_advance() {
    let mut f = filter(50.0, 400.0);
    f.update(10.0, 0.1);
    let state = f.state();
    f.update(10.0, f64::NAN);
    f.update(10.0, -0.5);
    assert_eq!(f.state(), state);
}

#[test]
fn step_input_converges_monotonically_when_critically_damped() {
    let mut f = filter(40.0, 400.0);
    let mut prev = f.value();
    for _ in 0..200 {
        let v = f.update(1.0, 0.01);
        assert!(v >= prev - 1e-12);
        assert!(v <= 1.0 + 1e-12);
        prev = v;
    }
    assert!((prev - 1.0).abs() < 1e-3);
}

#[test]
fn huge_frame_hitch_settles_on_target() {
    let mut f = filter(50.0, 400.0);
    assert_eq!(f.update(1000.0, 1e9), 1000.0);
    assert!(f.is_settled(1e-9));

    let mut under = filter(5.0, 400.0);
    let v = under.update(1000.0, 1e6);
    assert!((v - 1000.0).abs() < 1e-6);
}

#[test]
fn underdamped_spring_stays_bounded() {
    let mut f = filter(10.0, 400.0);
    let mut peak: f64 = 0.0;
    for _ in 0..600 {
        peak = peak.max(f.update(1.0, 1.0 / 60.0));
    }
    assert!(peak > 1.0);
    assert!(peak < 2.0);
    assert!((f.value() - 1.0).abs() < 1e-3);
}

#[test]
fn scroll_burst_rises_then_decays_without_sign_reversal() {
    let mut f = filter(50.0, 400.0);
    let mut outputs = Vec::new();
    for raw in [0.0, 1000.0, 0.0, 0.0, 0.0] {
        for _ in 0..60 {
            outputs.push(f.update(raw, 1.0 / 60.0));
        }
    }
    let peak = outputs.iter().copied().fold(f64::MIN, f64::max);
    assert!(peak > 900.0);
    assert!(peak <= 1000.0);
    for v in &outputs {
        assert!(*v >= -1e-6, "sign reversal: {v}");
    }
    assert!(outputs.last().unwrap().abs() < 1e-3);
}

#[test]
fn one_hertz_steps_follow_the_burst() {
    let mut f = filter(50.0, 400.0);
    let out: Vec<f64> = [0.0, 1000.0, 0.0, 0.0]
        .into_iter()
        .map(|raw| f.update(raw, 1.0))
        .collect();
    assert_eq!(out[0], 0.0);
    assert!(out[1] > 999.0 && out[1] <= 1000.0);
    assert!(out[2] >= 0.0 && out[2] < 1.0);
    assert!(out[3] >= 0.0 && out[3] < out[2]);
}

#[test]
fn reset_snaps_to_rest() {
    let mut f = filter(50.0, 400.0);
    f.update(500.0, 0.2);
    f.reset(12.0);
    assert_eq!(f.value(), 12.0);
    assert_eq!(f.target(), 12.0);
    assert!(f.is_settled(1e-12));
}
