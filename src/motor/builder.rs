//! Builder pattern for AngleStepper.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::DegreesPerSec;
use crate::config::{AngleMode, MotorConfig, StepMode, SystemConfig};
use crate::error::{ConfigError, Error, Result};
use crate::motion::Direction;

use super::driver::AngleStepper;

/// Builder for creating AngleStepper instances.
///
/// Geometry defaults to a 200 step/rev motor, no gearing, full step.
pub struct AngleStepperBuilder<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    delay: Option<DELAY>,
    config: MotorConfig,
}

impl<STEP, DIR, DELAY> Default for AngleStepperBuilder<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, DELAY> AngleStepperBuilder<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            step_pin: None,
            dir_pin: None,
            delay: None,
            config: MotorConfig::default(),
        }
    }

    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the motor name (ignored if longer than 32 bytes).
    pub fn name(mut self, name: &str) -> Self {
        if let Ok(name) = heapless::String::try_from(name) {
            self.config.name = name;
        }
        self
    }

    /// Set the microstep mode.
    pub fn step_mode(mut self, mode: StepMode) -> Self {
        self.config.step_mode = mode;
        self
    }

    /// Set the angle normalization mode.
    pub fn angle_mode(mut self, mode: AngleMode) -> Self {
        self.config.angle_mode = mode;
        self
    }

    /// Set full steps per motor revolution.
    pub fn steps_per_revolution(mut self, steps: u16) -> Self {
        self.config.steps_per_revolution = steps;
        self
    }

    /// Set gear ratio.
    pub fn gear_ratio(mut self, ratio: f32) -> Self {
        self.config.gear_ratio = ratio;
        self
    }

    /// Set the initial commanded speed.
    pub fn max_speed(mut self, speed: DegreesPerSec) -> Self {
        self.config.max_speed = speed;
        self
    }

    /// Set the step count used by `move_to_next`.
    pub fn next_step_size(mut self, steps: u32) -> Self {
        self.config.next_step_size = Some(steps);
        self
    }

    /// Set the direction used by `move_to_next`.
    pub fn next_direction(mut self, direction: Direction) -> Self {
        self.config.next_direction = direction;
        self
    }

    /// Configure from a MotorConfig.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Configure from SystemConfig by motor name.
    pub fn from_config(self, config: &SystemConfig, motor_name: &str) -> Result<Self> {
        let motor_config = config.motor(motor_name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(motor_name).unwrap_or_default(),
            ))
        })?;

        Ok(self.from_motor_config(motor_config))
    }

    /// Build the AngleStepper.
    ///
    /// Drives the STEP pin low. Numeric parameters are not validated here;
    /// use [`validate_motor`](crate::config::validate_motor) for that.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin or the delay is missing, or if the STEP pin
    /// cannot be driven.
    pub fn build(self) -> Result<AngleStepper<STEP, DIR, DELAY>> {
        let step_pin = self
            .step_pin
            .ok_or(Error::Config(ConfigError::MissingField("step_pin")))?;
        let dir_pin = self
            .dir_pin
            .ok_or(Error::Config(ConfigError::MissingField("dir_pin")))?;
        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;

        debug_assert!(self.config.steps_per_revolution > 0, "steps per revolution must be > 0");
        debug_assert!(self.config.gear_ratio > 0.0, "gear ratio must be > 0");
        debug_assert!(self.config.max_speed.0 > 0.0, "max speed must be > 0");

        AngleStepper::new(step_pin, dir_pin, delay, &self.config)
    }
}
