use super::*;
use crate::config::model::TrackConfig;

fn engine() -> MarqueeEngine {
    MarqueeEngine::new(MarqueeConfig::default()).unwrap()
}

fn ids(e: &MarqueeEngine) -> (TrackId, TrackId) {
    (e.track_id("left").unwrap(), e.track_id("right").unwrap())
}

#[test]
fn rejects_misconfiguration_at_construction() {
    let mut cfg = MarqueeConfig::default();
    cfg.tracks[0].repeat_count = 0;
    assert!(MarqueeEngine::new(cfg).is_err());

    let mut cfg = MarqueeConfig::default();
    cfg.spring.stiffness = 0.0;
    assert!(MarqueeEngine::new(cfg).is_err());
}

#[test]
fn unmeasured_tracks_stay_at_zero() {
    let mut e = engine();
    e.on_velocity_sample(2500.0);
    for _ in 0..120 {
        e.on_frame(1.0 / 60.0);
    }
    for t in e.tracks() {
        assert_eq!(t.position_px(), 0.0);
        assert_eq!(t.offset_px(), 0.0);
        assert_eq!(t.phase(), TrackPhase::Unmeasured);
    }
    assert_eq!(e.frame(), 120);
}

#[test]
fn tracks_move_in_opposite_directions() {
    let mut e = engine();
    let (left, right) = ids(&e);
    e.set_track_width(left, 600.0).unwrap();
    e.set_track_width(right, 600.0).unwrap();
    e.on_frame(1.0);
    assert_eq!(e.track(left).unwrap().position_px(), -50.0);
    assert_eq!(e.track(right).unwrap().position_px(), 50.0);
    assert_eq!(e.offset_px(left), Some(-50.0));
    assert_eq!(e.offset_px(right), Some(-550.0));
}

#[test]
fn width_change_on_one_track_does_not_affect_the_other() {
    let mut a = engine();
    let mut b = engine();
    let (left, right) = ids(&a);
    for e in [&mut a, &mut b] {
        e.set_track_width(left, 500.0).unwrap();
        e.set_track_width(right, 700.0).unwrap();
    }
    for i in 0..300 {
        if i == 100 {
            b.set_track_width(left, 420.0).unwrap();
        }
        if i % 30 == 0 {
            a.on_velocity_sample(800.0);
            b.on_velocity_sample(800.0);
        }
        a.on_frame(1.0 / 60.0);
        b.on_frame(1.0 / 60.0);
        assert_eq!(a.offset_px(right), b.offset_px(right));
    }
    assert_ne!(a.offset_px(left), b.offset_px(left));
}

#[test]
fn scroll_speeds_up_both_tracks_regardless_of_direction() {
    let mut e = engine();
    let (left, right) = ids(&e);
    e.set_track_width(left, 10_000.0).unwrap();
    e.set_track_width(right, 10_000.0).unwrap();
    e.on_velocity_sample(-1000.0);
    for _ in 0..60 {
        e.on_frame(1.0 / 60.0);
    }
    assert!(e.smoothed_velocity() < -900.0);
    assert!(e.multiplier() > 5.0);
    assert!(e.track(left).unwrap().position_px() < -50.0);
    assert!(e.track(right).unwrap().position_px() > 50.0);
}

#[test]
fn malformed_frame_input_is_ignored() {
    let mut e = engine();
    let (left, _) = ids(&e);
    e.set_track_width(left, 300.0).unwrap();
    e.on_frame(f64::NAN);
    e.on_frame(-0.5);
    e.on_velocity_sample(f64::NAN);
    assert_eq!(e.track(left).unwrap().position_px(), 0.0);
    assert_eq!(e.smoothed_velocity(), 0.0);
    assert_eq!(e.snapshot().elapsed_secs, 0.0);
}

#[test]
fn unknown_track_is_a_validation_error() {
    let mut e = engine();
    let err = e.set_track_width(TrackId(9), 100.0).unwrap_err();
    assert!(err.to_string().contains("unknown track"));
    assert!(e.track_id("middle").is_none());
    assert_eq!(e.offset_px(TrackId(9)), None);
}

#[test]
fn scroll_positions_drive_the_filter_and_go_stale() {
    let mut e = engine();
    let mut y = 0.0;
    for i in 0..30 {
        y += 10.0;
        e.on_scroll_position(y, f64::from(i) / 60.0);
        e.on_frame(1.0 / 60.0);
    }
    let moving = e.smoothed_velocity();
    assert!(moving > 300.0, "{moving}");

    for _ in 0..240 {
        e.on_frame(1.0 / 60.0);
    }
    assert!(e.smoothed_velocity().abs() < 1.0);
    assert_eq!(e.multiplier(), 1.0 + e.snapshot().velocity_factor.abs());
}

#[test]
fn intro_fades_in_over_configured_duration() {
    let mut e = engine();
    assert_eq!(e.opacity(), 0.0);
    e.on_frame(0.4);
    let mid = e.opacity();
    assert!(mid > 0.5 && mid < 1.0);
    e.on_frame(0.4);
    assert_eq!(e.opacity(), 1.0);

    let mut cfg = MarqueeConfig::default();
    cfg.intro = None;
    assert_eq!(MarqueeEngine::new(cfg).unwrap().opacity(), 1.0);
}

#[test]
fn snapshot_lists_tracks_in_order() {
    let mut cfg = MarqueeConfig::default();
    cfg.tracks.push(TrackConfig::new("extra", 10.0));
    let mut e = MarqueeEngine::new(cfg).unwrap();
    e.set_track_width(TrackId(2), 100.0).unwrap();
    e.on_frame(0.5);
    let snap = e.snapshot();
    let names: Vec<_> = snap.tracks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["left", "right", "extra"]);
    assert_eq!(snap.tracks[2].phase, TrackPhase::Active);
    assert_eq!(snap.tracks[2].offset_px, -95.0);
    assert_eq!(snap.frame, 1);
}

#[test]
fn short_content_on_wide_viewport_still_activates() {
    let mut cfg = MarqueeConfig::default();
    cfg.viewport_px = Some(1920.0);
    cfg.tracks[0].repeat_count = 2;
    let mut e = MarqueeEngine::new(cfg).unwrap();
    let (left, _) = ids(&e);

    e.set_track_width(left, 400.0).unwrap();
    let track = e.track(left).unwrap();
    assert!(!track.content().covers_viewport(track.width_px(), 1920.0));
    assert_eq!(track.phase(), TrackPhase::Active);

    e.on_frame(1.0);
    assert_eq!(e.track(left).unwrap().position_px(), -50.0);
}
