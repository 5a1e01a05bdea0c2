// Host-side tests for page wiring constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct_and_non_empty() {
    let ids = [
        CANVAS_ID,
        STATUS_LABEL_ID,
        INDICATOR_ROW_ID,
        INDICATOR_LABEL_ID,
        MOTION_BUTTON_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(' '), "id {:?} has whitespace", a);
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particles_draw_at_half_their_size() {
    assert!(RADIUS_PER_SIZE > 0.0 && RADIUS_PER_SIZE <= 1.0);
    let (lo, hi) = swarm_core::SIZE_RANGE;
    assert!(lo as f64 * RADIUS_PER_SIZE >= 1.0);
    assert!(hi as f64 * RADIUS_PER_SIZE < 16.0);
}

#[test]
fn trail_wash_is_translucent() {
    let alpha: f64 = TRAIL_FILL
        .trim_end_matches(')')
        .rsplit(',')
        .next()
        .and_then(|s| s.trim().parse().ok())
        .unwrap();
    assert!(alpha > 0.0 && alpha < 0.5);
}
