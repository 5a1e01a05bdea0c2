//! Frame orchestration: resolve steering, smooth it, push every particle.

use crate::config::{MotionProfile, SwarmConfig};
use crate::constants::IDLE_DAMPING;
use crate::flow::NoiseField;
use crate::orientation::OrientationTracker;
use crate::particle::{Launch, Particle};
use crate::status::{indicator_for, Indicator};
use crate::steering::{resolve, ControlMode, IdlePolicy, PointerState, SteeringContext, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Summary of one stepped frame, for status display and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub mode: ControlMode,
    pub target: Vec2,
    pub smoothed: Vec2,
    pub indicator: Indicator,
}

impl FrameReport {
    #[inline]
    pub fn controlling(&self) -> bool {
        self.mode != ControlMode::Idle
    }
}

pub struct Swarm {
    particles: Vec<Particle>,
    steering: SteeringContext,
    noise: NoiseField,
    viewport: Viewport,
    profile: MotionProfile,
    idle: IdlePolicy,
    frame: u64,
}

impl Swarm {
    /// Build a fixed-size swarm. Particle looks and the noise field derive from
    /// `seed`, so two swarms with the same inputs evolve identically.
    pub fn new(
        config: &SwarmConfig,
        viewport: Viewport,
        tracker: OrientationTracker,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = NoiseField::new(rng.gen());
        let launch = match config.profile {
            MotionProfile::Drifting => Launch::Drifting,
            MotionProfile::Settling => Launch::AtRest,
        };
        let particles = (0..config.particle_count)
            .map(|_| Particle::spawn(&mut rng, &viewport, launch))
            .collect::<Vec<_>>();
        log::info!(
            "[swarm] particles={} profile={:?} idle={:?} viewport={}x{} access={:?}",
            particles.len(),
            config.profile,
            config.idle,
            viewport.width,
            viewport.height,
            tracker.access()
        );
        Self {
            particles,
            steering: SteeringContext::new(tracker),
            noise,
            viewport,
            profile: config.profile,
            idle: config.idle,
            frame: 0,
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn steering(&self) -> &SteeringContext {
        &self.steering
    }

    /// Sensor and permission updates go through here.
    #[inline]
    pub fn steering_mut(&mut self) -> &mut SteeringContext {
        &mut self.steering
    }

    #[inline]
    pub fn tracker_mut(&mut self) -> &mut OrientationTracker {
        &mut self.steering.tracker
    }

    /// Adopt a new viewport. Invalid sizes are ignored.
    pub fn resize(&mut self, viewport: Viewport) {
        if !viewport.is_valid() {
            log::warn!(
                "[swarm] ignoring invalid viewport {}x{}",
                viewport.width,
                viewport.height
            );
            return;
        }
        self.viewport = viewport;
    }

    /// Run one frame and advance the frame counter.
    pub fn step(&mut self, pointer: &PointerState, now_ms: f64) -> FrameReport {
        let resolution = resolve(
            &self.steering.tracker,
            pointer,
            &self.viewport,
            now_ms,
            self.frame,
            self.idle,
        );
        let smoothed = self.steering.blend_toward(resolution.target);
        let controlling = resolution.controlling();

        let (with_flow, damping) = match self.profile {
            MotionProfile::Drifting => (true, None),
            MotionProfile::Settling => (controlling, (!controlling).then_some(IDLE_DAMPING)),
        };

        let frame = self.frame;
        let viewport = self.viewport;
        for p in &mut self.particles {
            p.apply_force(smoothed);
            if with_flow {
                p.apply_flow(&self.noise, frame);
            }
            p.integrate(damping, &viewport);
        }

        self.frame += 1;
        FrameReport {
            frame,
            mode: resolution.mode,
            target: resolution.target,
            smoothed,
            indicator: indicator_for(resolution.mode, self.steering.tracker.access()),
        }
    }
}
