//! Configuration validation.
//!
//! The stepper itself trusts its numeric parameters; this is where bad
//! values are turned into errors before a motor is built.

use crate::error::{ConfigError, Error, Result};

use super::{MotorConfig, StepResolution, SystemConfig};

/// Validate a system configuration.
///
/// Checks every motor for:
/// - steps per revolution > 0
/// - finite gear ratio > 0, coarse enough that a step is at least one
///   micro-degree
/// - finite max speed > 0
/// - next step size > 0 when set
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_name, motor) in config.motors.iter() {
        validate_motor(motor)?;
    }

    Ok(())
}

/// Validate a single motor configuration.
pub fn validate_motor(config: &MotorConfig) -> Result<()> {
    if config.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
            config.steps_per_revolution,
        )));
    }

    if !(config.gear_ratio.is_finite() && config.gear_ratio > 0.0) {
        return Err(Error::Config(ConfigError::InvalidGearRatio(config.gear_ratio)));
    }

    // Step counts are derived by dividing by this.
    if StepResolution::from_config(config).micro_angle_per_step.0 == 0 {
        return Err(Error::Config(ConfigError::InvalidGearRatio(config.gear_ratio)));
    }

    if !(config.max_speed.0.is_finite() && config.max_speed.0 > 0.0) {
        return Err(Error::Config(ConfigError::InvalidMaxSpeed(config.max_speed.0)));
    }

    if config.next_step_size == Some(0) {
        return Err(Error::Config(ConfigError::InvalidNextStepSize(0)));
    }

    Ok(())
}
