// Host-side tests for swarm configuration parsing.

use swarm_core::*;

#[test]
fn defaults_match_drifting_swarm() {
    let c = SwarmConfig::default();
    assert_eq!(c.particle_count, 140);
    assert_eq!(c.profile, MotionProfile::Drifting);
    assert_eq!(c.idle, IdlePolicy::Ambient);
    assert_eq!(c.seed, None);
    assert!(c.validate().is_ok());
}

#[test]
fn empty_query_gives_defaults() {
    assert_eq!(SwarmConfig::from_query("").unwrap(), SwarmConfig::default());
    assert_eq!(SwarmConfig::from_query("?").unwrap(), SwarmConfig::default());
}

#[test]
fn query_sets_all_fields() {
    let c = SwarmConfig::from_query("?particles=300&profile=settling&idle=ambient&seed=9").unwrap();
    assert_eq!(c.particle_count, 300);
    assert_eq!(c.profile, MotionProfile::Settling);
    assert_eq!(c.idle, IdlePolicy::Ambient);
    assert_eq!(c.seed, Some(9));
}

#[test]
fn idle_follows_profile_unless_given() {
    let c = SwarmConfig::from_query("profile=Settling").unwrap();
    assert_eq!(c.idle, IdlePolicy::Coast);
    let c = SwarmConfig::from_query("profile=drifting&idle=coast").unwrap();
    assert_eq!(c.idle, IdlePolicy::Coast);
}

#[test]
fn unknown_keys_are_ignored() {
    let c = SwarmConfig::from_query("utm_source=feed&particles=12").unwrap();
    assert_eq!(c.particle_count, 12);
}

#[test]
fn malformed_values_are_rejected() {
    assert_eq!(
        SwarmConfig::from_query("particles=lots"),
        Err(ConfigError::InvalidValue {
            key: "particles".into(),
            value: "lots".into()
        })
    );
    assert!(SwarmConfig::from_query("profile=wobbly").is_err());
    assert!(SwarmConfig::from_query("idle=").is_err());
    assert!(SwarmConfig::from_query("seed=-1").is_err());
}

#[test]
fn particle_count_bounds_are_enforced() {
    assert!(matches!(
        SwarmConfig::from_query("particles=0"),
        Err(ConfigError::ParticleCount { got: 0, .. })
    ));
    let too_many = format!("particles={}", MAX_PARTICLE_COUNT + 1);
    assert!(SwarmConfig::from_query(&too_many).is_err());
    let max = format!("particles={}", MAX_PARTICLE_COUNT);
    assert!(SwarmConfig::from_query(&max).is_ok());
}

#[test]
fn cli_style_pairs_parse_the_same() {
    let c = SwarmConfig::from_pairs(["particles=50", "profile=settling"]).unwrap();
    assert_eq!(c.particle_count, 50);
    assert_eq!(c.profile, MotionProfile::Settling);
}

#[test]
fn errors_render_readably() {
    let e = ConfigError::ParticleCount { got: 0, max: 5000 };
    assert_eq!(e.to_string(), "particle count must be between 1 and 5000, got 0");
}
