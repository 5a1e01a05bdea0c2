//! Platform-free core of the tilt-steered particle swarm.
//!
//! Front-ends feed pointer and orientation input in, call [`Swarm::step`] once
//! per animation frame, and draw [`Swarm::particles`].

pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod flow;
pub mod orientation;
pub mod particle;
pub mod status;
pub mod steering;
pub mod swarm;

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use flow::*;
pub use orientation::*;
pub use particle::*;
pub use status::*;
pub use steering::*;
pub use swarm::*;
