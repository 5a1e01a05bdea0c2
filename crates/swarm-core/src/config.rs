//! Swarm configuration and its `key=value` text form.
//!
//! The same text form is read from the page query string on the web and from
//! command-line arguments natively, e.g. `particles=300&profile=settling`.

use crate::constants::{DEFAULT_PARTICLE_COUNT, MAX_PARTICLE_COUNT};
use crate::error::ConfigError;
use crate::steering::IdlePolicy;

/// Overall motion character of the swarm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionProfile {
    /// Particles launch moving, flow noise always applies, no damping.
    #[default]
    Drifting,
    /// Particles launch at rest; flow noise and free motion only while
    /// steered, otherwise velocity decays so the swarm comes to rest.
    Settling,
}

impl MotionProfile {
    pub fn default_idle(self) -> IdlePolicy {
        match self {
            MotionProfile::Drifting => IdlePolicy::Ambient,
            MotionProfile::Settling => IdlePolicy::Coast,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwarmConfig {
    pub particle_count: usize,
    pub profile: MotionProfile,
    pub idle: IdlePolicy,
    pub seed: Option<u64>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self::for_profile(MotionProfile::default())
    }
}

impl SwarmConfig {
    pub fn for_profile(profile: MotionProfile) -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            profile,
            idle: profile.default_idle(),
            seed: None,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 || self.particle_count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::ParticleCount {
                got: self.particle_count,
                max: MAX_PARTICLE_COUNT,
            });
        }
        Ok(())
    }

    /// Parse `key=value` pairs separated by `&`; a leading `?` is allowed.
    ///
    /// The idle policy follows the profile unless `idle` is given explicitly.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        Self::from_pairs(
            query
                .trim_start_matches('?')
                .split('&')
                .filter(|s| !s.is_empty()),
        )
    }

    /// Parse an iterator of `key=value` items, as produced by CLI arguments.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut particle_count = DEFAULT_PARTICLE_COUNT;
        let mut profile = MotionProfile::default();
        let mut idle = None;
        let mut seed = None;

        for pair in pairs {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = key.trim();
            let value = value.trim();
            let invalid = || ConfigError::InvalidValue {
                key: key.to_owned(),
                value: value.to_owned(),
            };
            match key {
                "particles" => particle_count = value.parse().map_err(|_| invalid())?,
                "profile" => {
                    profile = match value.to_ascii_lowercase().as_str() {
                        "drifting" => MotionProfile::Drifting,
                        "settling" => MotionProfile::Settling,
                        _ => return Err(invalid()),
                    }
                }
                "idle" => {
                    idle = Some(match value.to_ascii_lowercase().as_str() {
                        "ambient" => IdlePolicy::Ambient,
                        "coast" => IdlePolicy::Coast,
                        _ => return Err(invalid()),
                    })
                }
                "seed" => seed = Some(value.parse().map_err(|_| invalid())?),
                _ => log::warn!("[config] ignoring unknown key {:?}", key),
            }
        }

        let config = Self {
            particle_count,
            profile,
            idle: idle.unwrap_or_else(|| profile.default_idle()),
            seed,
        };
        config.validate()?;
        Ok(config)
    }
}
