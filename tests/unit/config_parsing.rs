//! Unit tests for TOML configuration parsing.

use angle_stepper::config::{parse_config, AngleMode, StepMode, SystemConfig};
use angle_stepper::Direction;

/// Test parsing a fully specified motor.
#[test]
fn test_parse_motor_config() {
    let toml_str = r#"
[motors.turret]
name = "turret"
step_mode = "quarter"
angle_mode = "end360"
steps_per_revolution = 400
gear_ratio = 3.0
max_speed_deg_per_sec = 120.0
next_step_size = 4
next_direction = "cw"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let motor = config.motor("turret").expect("Motor not found");

    assert_eq!(motor.name.as_str(), "turret");
    assert_eq!(motor.step_mode, StepMode::Quarter);
    assert_eq!(motor.angle_mode, AngleMode::End360);
    assert_eq!(motor.steps_per_revolution, 400);
    assert_eq!(motor.gear_ratio, 3.0);
    assert_eq!(motor.max_speed.0, 120.0);
    assert_eq!(motor.next_step_size, Some(4));
    assert_eq!(motor.next_direction, Direction::Clockwise);
}

/// Test that omitted fields fall back to the common motor defaults.
#[test]
fn test_parse_defaults() {
    let toml_str = r#"
[motors.plain]
name = "plain"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let motor = config.motor("plain").expect("Motor not found");

    assert_eq!(motor.steps_per_revolution, 200);
    assert_eq!(motor.gear_ratio, 1.0);
    assert_eq!(motor.step_mode, StepMode::Full);
    assert_eq!(motor.angle_mode, AngleMode::End360);
    assert_eq!(motor.max_speed.0, 10.0);
    assert_eq!(motor.next_step_size, None);
    assert_eq!(motor.effective_next_step_size(), 1);
}

/// Test several motors in one file.
#[test]
fn test_parse_multiple_motors() {
    let toml_str = r#"
[motors.pan]
step_mode = "half"

[motors.tilt]
step_mode = "eighth"
gear_ratio = 5.0
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    let names: Vec<_> = config.motor_names().collect();

    assert_eq!(names, vec!["pan", "tilt"]);
    assert_eq!(config.motor("tilt").unwrap().step_mode, StepMode::Eighth);
    assert!(config.motor("roll").is_none());
}

/// Test that unknown step modes are rejected during parsing.
#[test]
fn test_invalid_step_mode_rejected() {
    let toml_str = r#"
[motors.bad]
step_mode = "sixteenth"
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject unsupported step mode");
}

/// Test that unknown directions are rejected during parsing.
#[test]
fn test_invalid_direction_rejected() {
    let toml_str = r#"
[motors.bad]
next_direction = "up"
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject unknown direction");
}
