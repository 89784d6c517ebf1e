//! Unit tests for configuration validation.

use angle_stepper::config::{validate_config, SystemConfig};
use angle_stepper::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[motors.stepper1]
step_mode = "eighth"
gear_ratio = 2.0
max_speed_deg_per_sec = 45.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for zero steps per revolution.
#[test]
fn test_zero_steps_per_revolution() {
    let toml_str = r#"
[motors.stepper1]
steps_per_revolution = 0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert_eq!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
    );
}

/// Test validation fails for a non-positive speed.
#[test]
fn test_zero_max_speed() {
    let toml_str = r#"
[motors.stepper1]
max_speed_deg_per_sec = 0.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidMaxSpeed(_)))
    ));
}

/// Test validation fails for a negative gear ratio on any motor.
#[test]
fn test_negative_gear_ratio_on_second_motor() {
    let toml_str = r#"
[motors.good]
gear_ratio = 1.0

[motors.bad]
gear_ratio = -2.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidGearRatio(_)))
    ));
}

/// Test validation fails when gearing leaves less than a micro-degree per step.
#[test]
fn test_gear_ratio_below_micro_degree_resolution() {
    let toml_str = r#"
[motors.fine]
step_mode = "eighth"
gear_ratio = 500000.0
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidGearRatio(_)))
    ));
}

/// Test that empty configuration is valid.
#[test]
fn test_empty_config_is_valid() {
    let config = SystemConfig::default();
    assert!(validate_config(&config).is_ok());
}
