// Host-side tests for the per-frame steering decision and force smoothing.

use glam::Vec2;
use swarm_core::*;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-5
}

fn granted_tracker() -> OrientationTracker {
    OrientationTracker::new(MotionAccess::Open)
}

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

#[test]
fn full_right_tilt_maps_to_tilt_gain() {
    let mut tracker = granted_tracker();
    assert!(tracker.handle_orientation_event(Some(45.0), Some(0.0), 0.0));
    let sample = tracker.sample().unwrap();
    assert!(approx(sample.tilt, Vec2::new(1.0, 0.0)));

    let r = resolve(
        &tracker,
        &PointerState::default(),
        &viewport(),
        10.0,
        0,
        IdlePolicy::Ambient,
    );
    assert_eq!(r.mode, ControlMode::Orientation);
    assert!(r.controlling());
    assert!(approx(r.target, Vec2::new(0.55, 0.0)));
}

#[test]
fn forward_tilt_moves_swarm_up_screen() {
    let mut tracker = granted_tracker();
    tracker.handle_orientation_event(Some(0.0), Some(45.0), 0.0);
    let r = resolve(
        &tracker,
        &PointerState::default(),
        &viewport(),
        0.0,
        0,
        IdlePolicy::Coast,
    );
    assert!(approx(r.target, Vec2::new(0.0, -TILT_GAIN)));
}

#[test]
fn out_of_range_tilt_is_clamped() {
    assert_eq!(normalize_tilt(-90.0), -1.0);
    assert_eq!(normalize_tilt(90.0), 1.0);
    assert!((normalize_tilt(22.5) - 0.5).abs() < 1e-6);
    assert_eq!(normalize_tilt(f64::NAN), 0.0);
}

#[test]
fn orientation_sample_expires_after_staleness_window() {
    let mut tracker = granted_tracker();
    let t0 = 1_000.0;
    tracker.handle_orientation_event(Some(20.0), Some(-10.0), t0);
    let pointer = PointerState::default();

    let live = resolve(&tracker, &pointer, &viewport(), t0 + 899.0, 0, IdlePolicy::Coast);
    assert_eq!(live.mode, ControlMode::Orientation);

    let stale = resolve(&tracker, &pointer, &viewport(), t0 + 901.0, 0, IdlePolicy::Coast);
    assert_eq!(stale.mode, ControlMode::Idle);
    // Expired, not erased: the last reading is still stored.
    assert!(tracker.sample().is_some());
}

#[test]
fn orientation_wins_over_pointer() {
    let mut tracker = granted_tracker();
    tracker.handle_orientation_event(Some(-45.0), Some(0.0), 0.0);
    let pointer = PointerState {
        position: Vec2::new(800.0, 600.0),
        pressed: true,
        touches: 1,
    };
    let r = resolve(&tracker, &pointer, &viewport(), 100.0, 0, IdlePolicy::Ambient);
    assert_eq!(r.mode, ControlMode::Orientation);
    assert!(approx(r.target, Vec2::new(-0.55, 0.0)));
}

#[test]
fn pointer_at_center_gives_zero_force() {
    let pointer = PointerState {
        position: viewport().center(),
        pressed: true,
        touches: 0,
    };
    let r = resolve(
        &OrientationTracker::unavailable(),
        &pointer,
        &viewport(),
        0.0,
        0,
        IdlePolicy::Ambient,
    );
    assert_eq!(r.mode, ControlMode::Pointer);
    assert!(approx(r.target, Vec2::ZERO));
}

#[test]
fn pointer_force_is_limited_to_gain() {
    let vp = viewport();
    // Far outside the half-min circle.
    let corner = pointer_force(Vec2::new(vp.width, vp.height), &vp);
    assert!((corner.length() - POINTER_GAIN).abs() < 1e-5);

    // Halfway from centre to the top edge: 150px of 300px half-min.
    let half = pointer_force(Vec2::new(400.0, 150.0), &vp);
    assert!(approx(half, Vec2::new(0.0, -0.5 * POINTER_GAIN)));
}

#[test]
fn touch_alone_counts_as_pointer_control() {
    let pointer = PointerState {
        position: Vec2::new(600.0, 300.0),
        pressed: false,
        touches: 2,
    };
    let r = resolve(
        &OrientationTracker::unavailable(),
        &pointer,
        &viewport(),
        0.0,
        0,
        IdlePolicy::Coast,
    );
    assert_eq!(r.mode, ControlMode::Pointer);
    assert!(r.target.x > 0.0);
}

#[test]
fn non_finite_pointer_is_zero_but_still_controlling() {
    let pointer = PointerState {
        position: Vec2::new(f32::NAN, 10.0),
        pressed: true,
        touches: 0,
    };
    let r = resolve(
        &OrientationTracker::unavailable(),
        &pointer,
        &viewport(),
        0.0,
        0,
        IdlePolicy::Ambient,
    );
    assert_eq!(r.mode, ControlMode::Pointer);
    assert!(r.controlling());
    assert_eq!(r.target, Vec2::ZERO);

    let inf = pointer_force(Vec2::new(f32::INFINITY, 0.0), &viewport());
    assert_eq!(inf, Vec2::ZERO);
}

#[test]
fn degenerate_viewport_does_not_blow_up_pointer_force() {
    let vp = Viewport::new(0.0, 0.0);
    let f = pointer_force(Vec2::new(3.0, 4.0), &vp);
    assert!(f.is_finite());
    assert!(f.length() <= POINTER_GAIN + 1e-5);
}

#[test]
fn idle_ambient_starts_at_zero() {
    let r = resolve(
        &OrientationTracker::unavailable(),
        &PointerState::default(),
        &viewport(),
        0.0,
        0,
        IdlePolicy::Ambient,
    );
    assert_eq!(r.mode, ControlMode::Idle);
    assert!(!r.controlling());
    assert!(approx(r.target, Vec2::ZERO));
}

#[test]
fn idle_ambient_drifts_gently() {
    let tracker = OrientationTracker::unavailable();
    let mut moved = false;
    for frame in 0..2_000 {
        let r = resolve(
            &tracker,
            &PointerState::default(),
            &viewport(),
            0.0,
            frame,
            IdlePolicy::Ambient,
        );
        assert!(r.target.x.abs() <= AMBIENT_AMPLITUDE + 1e-6);
        assert!(r.target.y.abs() <= AMBIENT_AMPLITUDE + 1e-6);
        moved |= r.target.length() > 0.1;
    }
    assert!(moved, "ambient drift never left the origin");
}

#[test]
fn ambient_is_suppressed_while_permission_is_pending() {
    let tracker = OrientationTracker::new(MotionAccess::AwaitingPermission);
    let r = resolve(
        &tracker,
        &PointerState::default(),
        &viewport(),
        0.0,
        300,
        IdlePolicy::Ambient,
    );
    assert_eq!(r.mode, ControlMode::Idle);
    assert_eq!(r.target, Vec2::ZERO);
}

#[test]
fn coast_policy_idles_at_zero() {
    let r = resolve(
        &OrientationTracker::unavailable(),
        &PointerState::default(),
        &viewport(),
        0.0,
        300,
        IdlePolicy::Coast,
    );
    assert_eq!(r.target, Vec2::ZERO);
}

#[test]
fn smoothing_converges_monotonically_within_56_frames() {
    let mut ctx = SteeringContext::default();
    let target = Vec2::new(0.55, -0.3);
    let mut prev_err = (ctx.smoothed_force() - target).length();
    let mut reached_at = None;
    for frame in 1..=80 {
        let s = ctx.blend_toward(target);
        let err = (s - target).length();
        assert!(err < prev_err, "error grew at frame {frame}");
        if reached_at.is_none() && err <= 0.01 * target.length() {
            reached_at = Some(frame);
        }
        prev_err = err;
    }
    let reached_at = reached_at.expect("never converged");
    assert!(reached_at <= 56, "took {reached_at} frames");
}

#[test]
fn smoothing_never_jumps() {
    let mut ctx = SteeringContext::default();
    let s = ctx.blend_toward(Vec2::new(1.0, 0.0));
    assert!((s.x - MOTION_SMOOTHING).abs() < 1e-6);
}
