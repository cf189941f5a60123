use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
    assert!(Fps::new(30000, 1001).is_ok());
}

#[test]
fn fps_frame_duration_matches_rate() {
    let fps = Fps::new(60, 1).unwrap();
    assert!((fps.frame_duration_secs() - 1.0 / 60.0).abs() < 1e-12);
    assert!((fps.frames_to_secs(120) - 2.0).abs() < 1e-12);
    assert_eq!(Fps::default(), fps);
}

#[test]
fn sanitize_dt_drops_malformed_deltas() {
    assert_eq!(sanitize_dt(0.016), 0.016);
    assert_eq!(sanitize_dt(0.0), 0.0);
    assert_eq!(sanitize_dt(-1.0), 0.0);
    assert_eq!(sanitize_dt(f64::NAN), 0.0);
    assert_eq!(sanitize_dt(f64::INFINITY), 0.0);
}
