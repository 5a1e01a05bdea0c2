//! Per-frame steering decision.
//!
//! Exactly one control source drives the swarm each frame, chosen by priority:
//! live device tilt, then an active pointer or touch, then idle. The result is
//! a target force; [`SteeringContext`] low-pass filters it into the force the
//! particles actually feel.

use crate::constants::{
    AMBIENT_AMPLITUDE, AMBIENT_FREQ_X, AMBIENT_FREQ_Y, MOTION_SMOOTHING, POINTER_GAIN, TILT_GAIN,
};
use crate::orientation::OrientationTracker;
use glam::Vec2;

/// Drawable area in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Half the smaller dimension, never below one pixel.
    #[inline]
    pub fn half_min(&self) -> f32 {
        (self.width.min(self.height) * 0.5).max(1.0)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Latest pointer/touch snapshot, overwritten by input events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub pressed: bool,
    pub touches: u32,
}

impl PointerState {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.pressed || self.touches > 0
    }
}

/// Which source controls the swarm this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlMode {
    Orientation,
    Pointer,
    Idle,
}

/// What the swarm does when nobody is steering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdlePolicy {
    /// Slow sinusoidal drift, unless a permission decision is outstanding.
    #[default]
    Ambient,
    /// Zero target; the swarm coasts.
    Coast,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub target: Vec2,
    pub mode: ControlMode,
}

impl Resolution {
    #[inline]
    pub fn controlling(&self) -> bool {
        self.mode != ControlMode::Idle
    }
}

#[inline]
pub fn tilt_force(tilt: Vec2) -> Vec2 {
    // Tilting forward pushes the swarm up-screen.
    Vec2::new(tilt.x, -tilt.y) * TILT_GAIN
}

/// Pointer displacement from centre, normalized by half the smaller side,
/// limited to unit length and scaled by the pointer gain.
pub fn pointer_force(position: Vec2, viewport: &Viewport) -> Vec2 {
    if !position.is_finite() {
        return Vec2::ZERO;
    }
    let force = ((position - viewport.center()) / viewport.half_min()).clamp_length_max(1.0)
        * POINTER_GAIN;
    if force.is_finite() {
        force
    } else {
        Vec2::ZERO
    }
}

/// Slow idle drift. Both axes start at zero on frame 0 and use incommensurate
/// frequencies so the path never repeats exactly.
#[inline]
pub fn ambient_force(frame: u64) -> Vec2 {
    let f = frame as f32;
    Vec2::new(
        (f * AMBIENT_FREQ_X).sin() * AMBIENT_AMPLITUDE,
        (f * AMBIENT_FREQ_Y).sin() * AMBIENT_AMPLITUDE,
    )
}

/// Pick the authoritative control source and its target force.
pub fn resolve(
    tracker: &OrientationTracker,
    pointer: &PointerState,
    viewport: &Viewport,
    now_ms: f64,
    frame: u64,
    idle: IdlePolicy,
) -> Resolution {
    if let Some(tilt) = tracker.active_tilt(now_ms) {
        return Resolution {
            target: tilt_force(tilt),
            mode: ControlMode::Orientation,
        };
    }
    if pointer.is_active() {
        return Resolution {
            target: pointer_force(pointer.position, viewport),
            mode: ControlMode::Pointer,
        };
    }
    let target = match idle {
        IdlePolicy::Ambient if !tracker.access().decision_pending() => ambient_force(frame),
        _ => Vec2::ZERO,
    };
    Resolution {
        target,
        mode: ControlMode::Idle,
    }
}

/// Session-long steering state: the orientation tracker and the smoothed force.
#[derive(Clone, Debug, Default)]
pub struct SteeringContext {
    pub tracker: OrientationTracker,
    smoothed: Vec2,
}

impl SteeringContext {
    pub fn new(tracker: OrientationTracker) -> Self {
        Self {
            tracker,
            smoothed: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn smoothed_force(&self) -> Vec2 {
        self.smoothed
    }

    /// Move the smoothed force a fixed fraction of the way to `target`.
    pub fn blend_toward(&mut self, target: Vec2) -> Vec2 {
        self.smoothed = self.smoothed.lerp(target, MOTION_SMOOTHING);
        self.smoothed
    }
}
