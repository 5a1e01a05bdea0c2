// Host-side tests for sensor capability detection and permission outcomes.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod sensor {
    include!("../src/sensor.rs");
}

use sensor::*;
use swarm_core::{MotionAccess, OrientationTracker, PermissionResponse};

#[test]
fn capabilities_map_to_access_states() {
    assert_eq!(
        access_from_capabilities(false, false),
        MotionAccess::Unavailable
    );
    // A stray requestPermission without the event is still unavailable
    assert_eq!(
        access_from_capabilities(false, true),
        MotionAccess::Unavailable
    );
    assert_eq!(access_from_capabilities(true, false), MotionAccess::Open);
    assert_eq!(
        access_from_capabilities(true, true),
        MotionAccess::AwaitingPermission
    );
}

#[test]
fn only_the_granted_answer_grants() {
    assert_eq!(
        classify_permission_answer(Ok(Some("granted"))),
        PermissionResponse::Granted
    );
    assert_eq!(
        classify_permission_answer(Ok(Some("denied"))),
        PermissionResponse::Denied
    );
    assert_eq!(
        classify_permission_answer(Ok(Some("Granted"))),
        PermissionResponse::Denied
    );
    assert_eq!(
        classify_permission_answer(Ok(None)),
        PermissionResponse::Denied
    );
}

#[test]
fn rejected_promise_is_a_failure() {
    assert_eq!(classify_permission_answer(Err(())), PermissionResponse::Failed);
}

#[test]
fn gated_browser_flow_reaches_granted_and_applies_readings() {
    let access = access_from_capabilities(true, true);
    let mut tracker = OrientationTracker::new(access);

    let early = RawOrientation {
        gamma: Some(20.0),
        beta: Some(-10.0),
        at_ms: 5.0,
    };
    assert!(!tracker.handle_orientation_event(early.gamma, early.beta, early.at_ms));

    assert!(tracker.begin_request());
    tracker.resolve_request(classify_permission_answer(Ok(Some("granted"))));
    assert_eq!(tracker.access(), MotionAccess::Granted);

    let reading = RawOrientation {
        gamma: Some(45.0),
        beta: None,
        at_ms: 100.0,
    };
    assert!(tracker.handle_orientation_event(reading.gamma, reading.beta, reading.at_ms));
    let tilt = tracker.active_tilt(150.0).unwrap();
    assert!((tilt.x - 1.0).abs() < 1e-6);
    assert_eq!(tilt.y, 0.0);
}
