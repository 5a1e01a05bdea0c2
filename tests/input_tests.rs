// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_coords_map_into_backing_store_pixels() {
    // 400x300 CSS box at (10, 20) backed by an 800x600 canvas (dpr 2)
    let origin = Vec2::new(10.0, 20.0);
    let css = Vec2::new(400.0, 300.0);
    let px = Vec2::new(800.0, 600.0);

    let top_left = client_to_canvas_px(Vec2::new(10.0, 20.0), origin, css, px);
    assert!((top_left - Vec2::ZERO).length() < 1e-5);

    let centre = client_to_canvas_px(Vec2::new(210.0, 170.0), origin, css, px);
    assert!((centre - Vec2::new(400.0, 300.0)).length() < 1e-4);

    let bottom_right = client_to_canvas_px(Vec2::new(410.0, 320.0), origin, css, px);
    assert!((bottom_right - px).length() < 1e-4);
}

#[test]
fn points_outside_the_canvas_extrapolate() {
    let p = client_to_canvas_px(
        Vec2::new(-90.0, 0.0),
        Vec2::ZERO,
        Vec2::new(100.0, 100.0),
        Vec2::new(100.0, 100.0),
    );
    assert!((p.x + 90.0).abs() < 1e-5);
}

#[test]
fn zero_sized_rect_gives_non_finite_position() {
    let p = client_to_canvas_px(
        Vec2::new(5.0, 5.0),
        Vec2::ZERO,
        Vec2::ZERO,
        Vec2::new(100.0, 100.0),
    );
    assert!(!p.is_finite());

    // The resolver turns that into no force at all
    let vp = swarm_core::Viewport::new(100.0, 100.0);
    assert_eq!(swarm_core::pointer_force(p, &vp), Vec2::ZERO);
}

#[test]
fn only_touch_pointers_are_left_to_touch_listeners() {
    assert!(is_touch_pointer("touch"));
    assert!(!is_touch_pointer("mouse"));
    assert!(!is_touch_pointer("pen"));
    assert!(!is_touch_pointer(""));
}
