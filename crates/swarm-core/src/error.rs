//! Error types for swarm configuration.
//!
//! The per-frame path never fails; only building a [`crate::SwarmConfig`]
//! from untrusted text can.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be between 1 and {max}, got {got}")]
    ParticleCount { got: usize, max: usize },
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
    #[error("viewport must have positive finite size, got {width}x{height}")]
    Viewport { width: f32, height: f32 },
}
