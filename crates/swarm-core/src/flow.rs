//! Procedural flow field.
//!
//! A seeded 3D gradient-noise function over (x, y, time) gives each particle a
//! smoothly varying heading. Nearby particles get similar headings and the
//! heading drifts slowly as the time coordinate advances, so the swarm moves
//! in coherent currents without any grid or fluid state.

use crate::constants::{BASE_FLOW_STRENGTH, FLOW_SCALE, FLOW_TIME_SCALE};
use glam::Vec2;
use noise::{NoiseFn, Perlin};
use std::f32::consts::TAU;

// Largest f32 strictly below 1.0; keeps samples in the half-open range.
const BELOW_ONE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Deterministic, stateless noise field. Safe to share across threads.
#[derive(Clone)]
pub struct NoiseField {
    seed: u32,
    perlin: Perlin,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            perlin: Perlin::new(seed),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Sample the field at `(x, y, t)`. Output lies in `[0, 1)`.
    pub fn sample(&self, x: f32, y: f32, t: f32) -> f32 {
        let raw = self.perlin.get([x as f64, y as f64, t as f64]);
        if !raw.is_finite() {
            return 0.5;
        }
        ((raw * 0.5 + 0.5) as f32).clamp(0.0, BELOW_ONE)
    }

    /// Heading in radians, `[0, TAU)`, at a particle position for a frame.
    pub fn flow_angle(&self, position: Vec2, frame: u64) -> f32 {
        let n = self.sample(
            position.x * FLOW_SCALE,
            position.y * FLOW_SCALE,
            frame as f32 * FLOW_TIME_SCALE,
        );
        TAU * n
    }

    /// Flow contribution for a particle: fixed magnitude, noise-driven heading.
    #[inline]
    pub fn flow_vector(&self, position: Vec2, frame: u64) -> Vec2 {
        Vec2::from_angle(self.flow_angle(position, frame)) * BASE_FLOW_STRENGTH
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField").field("seed", &self.seed).finish()
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new(0)
    }
}
