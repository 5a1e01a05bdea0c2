//! A single swarm particle: motion state plus fixed appearance.

use crate::constants::{
    ALPHA_RANGE, HUE_RANGE, LAUNCH_SPEED_RANGE, MAX_SPEED, SATURATION, SIZE_RANGE,
    TWINKLE_ALPHA_BOOST, TWINKLE_BRIGHTNESS, TWINKLE_RATE,
};
use crate::flow::NoiseField;
use crate::steering::Viewport;
use glam::{Vec2, Vec4};
use rand::Rng;
use std::f32::consts::TAU;

/// Initial velocity for freshly spawned particles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Launch {
    /// Random heading, speed drawn from the launch range.
    Drifting,
    AtRest,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    acceleration: Vec2,
    pub size: f32,
    pub hue: f32,
    pub saturation: f32,
    pub alpha_base: f32,
    pub twinkle_phase: f32,
}

/// Colour for one frame on the HSB 360/100/100/100 scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub alpha: f32,
}

impl Appearance {
    /// CSS colour string for a 2D canvas fill style.
    pub fn hsla(&self) -> String {
        let (h, s, l) = hsb_to_hsl(self.hue, self.saturation / 100.0, self.brightness / 100.0);
        format!(
            "hsla({:.1}, {:.1}%, {:.1}%, {:.3})",
            h,
            s * 100.0,
            l * 100.0,
            (self.alpha / 100.0).clamp(0.0, 1.0)
        )
    }

    /// Straight (non-premultiplied) RGBA in `[0, 1]`.
    pub fn rgba(&self) -> Vec4 {
        let [r, g, b] = hsb_to_rgb(self.hue, self.saturation / 100.0, self.brightness / 100.0);
        Vec4::new(r, g, b, (self.alpha / 100.0).clamp(0.0, 1.0))
    }
}

fn hsb_to_hsl(hue: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let l = v * (1.0 - s * 0.5);
    let sl = if l <= 0.0 || l >= 1.0 {
        0.0
    } else {
        (v - l) / l.min(1.0 - l)
    };
    (hue, sl, l)
}

fn hsb_to_rgb(hue: f32, s: f32, v: f32) -> [f32; 3] {
    let h = (hue.rem_euclid(360.0)) / 60.0;
    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = v - c;
    [r + m, g + m, b + m]
}

impl Particle {
    /// Build a particle at a random spot in the viewport with randomized looks.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport, launch: Launch) -> Self {
        let position = Vec2::new(
            rng.gen::<f32>() * viewport.width.max(0.0),
            rng.gen::<f32>() * viewport.height.max(0.0),
        );
        let velocity = match launch {
            Launch::Drifting => {
                let heading = rng.gen_range(0.0..TAU);
                let speed = rng.gen_range(LAUNCH_SPEED_RANGE.0..LAUNCH_SPEED_RANGE.1);
                Vec2::from_angle(heading) * speed
            }
            Launch::AtRest => Vec2::ZERO,
        };
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            size: rng.gen_range(SIZE_RANGE.0..SIZE_RANGE.1),
            hue: rng.gen_range(HUE_RANGE.0..HUE_RANGE.1),
            saturation: SATURATION,
            alpha_base: rng.gen_range(ALPHA_RANGE.0..ALPHA_RANGE.1),
            twinkle_phase: rng.gen_range(0.0..TAU),
        }
    }

    #[inline]
    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    #[inline]
    pub fn apply_flow(&mut self, field: &NoiseField, frame: u64) {
        self.acceleration += field.flow_vector(self.position, frame);
    }

    /// Advance one frame.
    ///
    /// `damping` is applied to velocity after the acceleration is added; pass
    /// `None` to skip it.
    pub fn integrate(&mut self, damping: Option<f32>, viewport: &Viewport) {
        self.velocity += self.acceleration;
        if let Some(d) = damping {
            self.velocity *= d;
        }
        self.velocity = self.velocity.clamp_length_max(MAX_SPEED);
        self.position += self.velocity;
        self.acceleration = Vec2::ZERO;
        self.wrap(viewport);
    }

    /// Re-enter from the opposite edge once fully past a boundary.
    pub fn wrap(&mut self, viewport: &Viewport) {
        let r = self.size;
        if self.position.x < -r {
            self.position.x = viewport.width + r;
        }
        if self.position.x > viewport.width + r {
            self.position.x = -r;
        }
        if self.position.y < -r {
            self.position.y = viewport.height + r;
        }
        if self.position.y > viewport.height + r {
            self.position.y = -r;
        }
    }

    /// Twinkle level in `[0, 1]` for a frame. Display only.
    #[inline]
    pub fn pulse(&self, frame: u64) -> f32 {
        ((frame as f32 * TWINKLE_RATE + self.twinkle_phase).sin() + 1.0) * 0.5
    }

    #[inline]
    pub fn brightness(&self, frame: u64) -> f32 {
        let (lo, hi) = TWINKLE_BRIGHTNESS;
        lo + (hi - lo) * self.pulse(frame)
    }

    #[inline]
    pub fn alpha(&self, frame: u64) -> f32 {
        self.alpha_base + self.pulse(frame) * TWINKLE_ALPHA_BOOST
    }

    pub fn appearance(&self, frame: u64) -> Appearance {
        Appearance {
            hue: self.hue,
            saturation: self.saturation,
            brightness: self.brightness(frame),
            alpha: self.alpha(frame),
        }
    }
}
