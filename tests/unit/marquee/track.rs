use super::*;

fn track(speed: f64) -> Track {
    Track::new(&TrackConfig::new("t", speed)).unwrap()
}

#[test]
fn unmeasured_track_is_frozen() {
    let mut t = track(-100.0);
    for _ in 0..100 {
        assert_eq!(t.tick(0.016, 3.0), 0.0);
    }
    assert_eq!(t.position_px(), 0.0);
    assert_eq!(t.phase(), TrackPhase::Unmeasured);
}

#[test]
fn zero_measurement_moves_to_measuring() {
    let mut t = track(-100.0);
    t.set_width(0.0);
    assert_eq!(t.phase(), TrackPhase::Measuring);
    t.tick(1.0, 1.0);
    assert_eq!(t.position_px(), 0.0);
    assert_eq!(t.offset_px(), 0.0);
}

#[test]
fn motion_starts_from_origin_once_measured() {
    let mut t = track(-100.0);
    for _ in 0..10 {
        t.tick(1.0, 1.0);
    }
    t.set_width(400.0);
    assert_eq!(t.phase(), TrackPhase::Active);
    assert_eq!(t.offset_px(), -400.0);
    let off = t.tick(0.5, 1.0);
    assert_eq!(t.position_px(), -50.0);
    assert_eq!(off, -50.0);
}

#[test]
fn resize_keeps_position() {
    let mut t = track(100.0);
    t.set_width(300.0);
    t.tick(1.0, 1.0);
    t.tick(1.0, 1.0);
    assert_eq!(t.position_px(), 200.0);
    let before = t.offset_px();
    t.set_width(350.0);
    assert_eq!(t.position_px(), 200.0);
    assert!((t.offset_px() - before).abs() <= 50.0 + 1e-9);
    assert_eq!(t.phase(), TrackPhase::Active);
}

#[test]
fn collapsing_width_suspends_motion() {
    let mut t = track(100.0);
    t.set_width(300.0);
    t.tick(1.0, 1.0);
    t.set_width(0.0);
    assert_eq!(t.phase(), TrackPhase::Measuring);
    t.tick(1.0, 1.0);
    assert_eq!(t.position_px(), 100.0);
    assert_eq!(t.offset_px(), 0.0);
}

#[test]
fn malformed_width_counts_as_unmeasured() {
    let mut t = track(100.0);
    t.set_width(f64::NAN);
    assert_eq!(t.width_px(), 0.0);
    assert_eq!(t.phase(), TrackPhase::Measuring);
    t.set_width(-20.0);
    assert_eq!(t.width_px(), 0.0);
}
