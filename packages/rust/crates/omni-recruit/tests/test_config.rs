//! RecruitConfig tests.

use omni_recruit::{LevelRange, RecruitConfig, RecruitError};

#[test]
fn test_default_config() {
    let config = RecruitConfig::default();

    assert_eq!(config.level_range(), LevelRange::new(1, 6));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_toml() {
    let config = RecruitConfig::from_toml_str("level_floor = 3\nlevel_ceiling = 5\n").unwrap();

    assert_eq!(config.level_floor, 3);
    assert_eq!(config.level_ceiling, 5);
}

#[test]
fn test_config_missing_keys_use_defaults() {
    let config = RecruitConfig::from_toml_str("level_floor = 2").unwrap();

    assert_eq!(config.level_range(), LevelRange::new(2, 6));
}

#[test]
fn test_config_rejects_inverted_default_range() {
    let result = RecruitConfig::from_toml_str("level_floor = 6\nlevel_ceiling = 2");

    assert!(matches!(result, Err(RecruitError::InvalidConfig(_))));
}

#[test]
fn test_config_rejects_bad_toml() {
    let result = RecruitConfig::from_toml_str("level_floor = \"three\"");

    assert!(matches!(result, Err(RecruitError::Config(_))));
}
