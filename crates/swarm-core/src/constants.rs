// Tuning constants for steering, flow and particle motion.

// Swarm size
pub const DEFAULT_PARTICLE_COUNT: usize = 140;
pub const MAX_PARTICLE_COUNT: usize = 5000;

// Flow field
pub const FLOW_SCALE: f32 = 0.0018; // position -> noise-space
pub const FLOW_TIME_SCALE: f32 = 0.004; // frame -> noise-space
pub const BASE_FLOW_STRENGTH: f32 = 0.05;

// Steering
pub const MOTION_SMOOTHING: f32 = 0.08; // EMA weight toward the target force
pub const TILT_GAIN: f32 = 0.55;
pub const POINTER_GAIN: f32 = 0.65;
pub const TILT_RANGE_DEG: f64 = 45.0; // tilt beyond this saturates
pub const ORIENTATION_STALE_MS: f64 = 900.0;

// Ambient idle drift
pub const AMBIENT_FREQ_X: f32 = 0.01;
pub const AMBIENT_FREQ_Y: f32 = 0.013;
pub const AMBIENT_AMPLITUDE: f32 = 0.18;

// Integration
pub const MAX_SPEED: f32 = 2.4; // units per frame
pub const IDLE_DAMPING: f32 = 0.9; // per-frame velocity decay when not controlled

// Per-particle appearance ranges (HSB, 360/100 scale)
pub const SIZE_RANGE: (f32, f32) = (6.0, 16.0);
pub const HUE_RANGE: (f32, f32) = (180.0, 230.0);
pub const ALPHA_RANGE: (f32, f32) = (40.0, 70.0);
pub const LAUNCH_SPEED_RANGE: (f32, f32) = (0.2, 1.2);
pub const SATURATION: f32 = 80.0;

// Twinkle
pub const TWINKLE_RATE: f32 = 0.05;
pub const TWINKLE_BRIGHTNESS: (f32, f32) = (60.0, 95.0);
pub const TWINKLE_ALPHA_BOOST: f32 = 20.0;
