//! Tests for engine configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        environment_mode = "fast_assert"

        [planning_user]
        id = -7
        name = "nobody"
    "#;

    let config = EngineConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::FastAssert);
    assert_eq!(config.planning_user.id, -7);
    assert_eq!(config.planning_user().id, UserId(-7));
    assert!(config.is_planning_user(UserId(-7)));
    assert!(!config.is_planning_user(User::PLANNING_USER_ID));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        environment_mode: full_assert
        planning_user:
          name: placeholder
    "#;

    let config = EngineConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
    assert_eq!(config.planning_user.id, User::PLANNING_USER_ID.0);
    assert_eq!(config.planning_user.name, "placeholder");
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert!(config.is_planning_user(User::PLANNING_USER_ID));
    assert!(!config.environment_mode.is_asserted());
}

#[test]
fn test_builder() {
    let config = EngineConfig::new()
        .with_environment_mode(EnvironmentMode::FullAssert)
        .with_planning_user(-2, "pool");

    assert!(config.environment_mode.is_asserted());
    assert!(config.environment_mode.is_fully_asserted());
    assert_eq!(config.planning_user().name, "pool");
}

#[test]
fn test_blank_planning_user_name_is_invalid() {
    let result = EngineConfig::from_toml_str(
        r#"
        [planning_user]
        name = "  "
    "#,
    );
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_unknown_environment_mode_is_rejected() {
    let result = EngineConfig::from_toml_str(r#"environment_mode = "turbo""#);
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = EngineConfig::load("/nonexistent/taskforge.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}
