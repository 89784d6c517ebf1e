//! Angle-commanded stepper driver.
//!
//! Generic over embedded-hal 1.0 pin and delay types.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::{Degrees, DegreesPerSec, MicroDegrees, Steps, MICRO_PER_DEGREE};
use crate::config::{AngleMode, MotorConfig, StepMode, StepResolution};
use crate::error::{MotorError, Result};
use crate::motion::{conversion, timing, Direction};

use super::builder::AngleStepperBuilder;
use super::position::Position;

/// Stepper motor commanded in output-shaft angles.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
///
/// Every motion command blocks until its last pulse has been emitted.
pub struct AngleStepper<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// STEP pin (one high pulse per step).
    step_pin: STEP,

    /// DIR pin (low = CW, high = CCW).
    dir_pin: DIR,

    /// Delay provider for pulse dwell.
    delay: DELAY,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,

    step_mode: StepMode,
    angle_mode: AngleMode,
    steps_per_revolution: u16,
    gear_ratio: f32,

    /// Derived once from the geometry above.
    resolution: StepResolution,

    /// Angle, step counter and swept distance.
    position: Position,

    /// Direction of the most recent step sequence.
    current_direction: Direction,

    /// Direction used by `move_to_next`.
    next_direction: Direction,

    max_speed: DegreesPerSec,

    /// Step count used by `move_to_next`, before gearing.
    next_step_size: u32,

    /// Pulse dwell, refreshed at the start of every motion command.
    step_delay_us: u32,
}

impl<STEP, DIR, DELAY> AngleStepper<STEP, DIR, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Start building a motor.
    pub fn builder() -> AngleStepperBuilder<STEP, DIR, DELAY> {
        AngleStepperBuilder::new()
    }

    /// Create a motor and drive the STEP pin to its inactive level.
    pub(crate) fn new(
        mut step_pin: STEP,
        dir_pin: DIR,
        delay: DELAY,
        config: &MotorConfig,
    ) -> Result<Self> {
        step_pin.set_low().map_err(|_| MotorError::PinError)?;

        let resolution = StepResolution::from_config(config);

        let mut motor = Self {
            step_pin,
            dir_pin,
            delay,
            name: config.name.clone(),
            step_mode: config.step_mode,
            angle_mode: config.angle_mode,
            steps_per_revolution: config.steps_per_revolution,
            gear_ratio: config.gear_ratio,
            resolution,
            position: Position::new(resolution.micro_angle_per_step, config.angle_mode),
            current_direction: Direction::Clockwise,
            next_direction: config.next_direction,
            max_speed: config.max_speed,
            next_step_size: config.effective_next_step_size(),
            step_delay_us: 0,
        };
        motor.calculate_step_delay();

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: {} micro-degrees/step, {} us/step",
            motor.name.as_str(),
            motor.resolution.micro_angle_per_step.0,
            motor.step_delay_us
        );

        Ok(motor)
    }

    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the derived angular resolution.
    #[inline]
    pub fn resolution(&self) -> &StepResolution {
        &self.resolution
    }

    /// Get the configured step mode.
    #[inline]
    pub fn step_mode(&self) -> StepMode {
        self.step_mode
    }

    /// Get the configured angle mode.
    #[inline]
    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Get full steps per motor revolution.
    #[inline]
    pub fn steps_per_revolution(&self) -> u16 {
        self.steps_per_revolution
    }

    /// Get the gear ratio.
    #[inline]
    pub fn gear_ratio(&self) -> f32 {
        self.gear_ratio
    }

    /// Get the current output angle in degrees.
    #[inline]
    pub fn current_angle(&self) -> Degrees {
        self.position.micro_angle().to_degrees()
    }

    /// Get the current output angle in micro-degrees.
    #[inline]
    pub fn current_micro_angle(&self) -> MicroDegrees {
        self.position.micro_angle()
    }

    /// Get the step counter.
    #[inline]
    pub fn current_step(&self) -> Steps {
        self.position.steps()
    }

    /// Get the distance travelled since the last reset, in degrees.
    #[inline]
    pub fn angle_swept(&self) -> Degrees {
        Degrees(self.position.micro_angle_swept() as f32 / MICRO_PER_DEGREE)
    }

    /// Get the distance travelled since the last reset, in micro-degrees.
    #[inline]
    pub fn micro_angle_swept(&self) -> i64 {
        self.position.micro_angle_swept()
    }

    /// Direction of the most recent step sequence.
    #[inline]
    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    /// Direction used by [`move_to_next`](Self::move_to_next).
    #[inline]
    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    /// Commanded speed.
    #[inline]
    pub fn max_speed(&self) -> DegreesPerSec {
        self.max_speed
    }

    /// Step count used by [`move_to_next`](Self::move_to_next), before gearing.
    #[inline]
    pub fn next_step_size(&self) -> u32 {
        self.next_step_size
    }

    /// Pulse dwell computed by the last motion command.
    #[inline]
    pub fn step_delay_us(&self) -> u32 {
        self.step_delay_us
    }

    /// Overwrite the current angle without moving (truncated to micro-degrees).
    pub fn set_current_angle(&mut self, angle: Degrees) {
        self.position.set_micro_angle(angle.to_micro());
    }

    /// Overwrite the current angle without moving.
    pub fn set_current_micro_angle(&mut self, angle: MicroDegrees) {
        self.position.set_micro_angle(angle);
    }

    /// Overwrite the step counter without moving.
    pub fn set_current_step(&mut self, step: Steps) {
        self.position.set_steps(step);
    }

    /// Zero the swept-angle accumulator.
    pub fn reset_angle_swept(&mut self) {
        self.position.reset_swept();
    }

    /// Set the commanded speed. Takes effect on the next motion command.
    ///
    /// `speed` must be positive.
    pub fn set_max_speed(&mut self, speed: DegreesPerSec) {
        self.max_speed = speed;
    }

    /// Set the step count used by [`move_to_next`](Self::move_to_next).
    pub fn set_next_step_size(&mut self, steps: u32) {
        self.next_step_size = steps;
    }

    /// Set the direction used by [`move_to_next`](Self::move_to_next).
    pub fn set_next_direction(&mut self, direction: Direction) {
        self.next_direction = direction;
    }

    /// Recompute the pulse dwell from the current speed and return it.
    pub fn calculate_step_delay(&mut self) -> u32 {
        self.step_delay_us = timing::step_delay_us(&self.resolution, self.max_speed);
        self.step_delay_us
    }

    /// Move to absolute angle 0 and zero the swept-angle accumulator.
    ///
    /// The step counter keeps counting the steps taken to get there.
    pub fn reset(&mut self) -> Result<()> {
        self.move_to_micro(MicroDegrees(0))?;
        self.reset_angle_swept();
        Ok(())
    }

    /// Move to an absolute angle in degrees.
    ///
    /// The target is truncated to micro-degrees and the difference is
    /// truncated to whole steps. Direction follows the sign of
    /// `target - current`; there is no shortest-path routing across 0°.
    pub fn move_to(&mut self, target: Degrees) -> Result<()> {
        self.move_to_micro(target.to_micro())
    }

    /// Move to an absolute angle in micro-degrees.
    pub fn move_to_micro(&mut self, target: MicroDegrees) -> Result<()> {
        self.calculate_step_delay();

        let steps =
            conversion::steps_to_target(target, self.position.micro_angle(), &self.resolution);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: move_to {} udeg -> {} steps",
            self.name.as_str(),
            target.0,
            steps
        );

        self.move_steps(steps)
    }

    /// Move by a relative angle in degrees, rounded to the nearest step.
    pub fn move_by(&mut self, delta: Degrees) -> Result<()> {
        self.calculate_step_delay();

        let steps = conversion::steps_for_delta(delta, &self.resolution);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: move_by {} deg -> {} steps",
            self.name.as_str(),
            delta.0,
            steps
        );

        self.move_steps(steps)
    }

    /// Move by a relative angle in micro-degrees, truncated to whole steps.
    pub fn move_by_micro(&mut self, delta: MicroDegrees) -> Result<()> {
        self.calculate_step_delay();

        let steps = conversion::steps_for_micro_delta(delta, &self.resolution);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "{}: move_by {} udeg -> {} steps",
            self.name.as_str(),
            delta.0,
            steps
        );

        self.move_steps(steps)
    }

    /// Take the programmed next step: `next_step_size` motor steps, scaled
    /// by the gear ratio, in `next_direction`.
    ///
    /// Returns the resulting angle.
    pub fn move_to_next(&mut self) -> Result<MicroDegrees> {
        self.calculate_step_delay();

        let steps =
            conversion::next_step_count(self.next_step_size, self.gear_ratio, self.next_direction);
        self.move_steps(steps)?;

        Ok(self.position.micro_angle())
    }

    /// Execute a signed number of steps.
    ///
    /// Sets the DIR pin from the sign (negative is counter-clockwise), then
    /// pulses `|steps|` times with the current step delay. Counts are final:
    /// no gearing is applied here.
    pub fn move_steps(&mut self, steps: i32) -> Result<()> {
        let direction = Direction::from_steps(steps);
        self.set_direction(direction)?;

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "{}: {} steps {} at {} us",
            self.name.as_str(),
            steps.unsigned_abs(),
            direction,
            self.step_delay_us
        );

        for _ in 0..steps.unsigned_abs() {
            self.step()?;
        }

        Ok(())
    }

    /// Emit one step pulse in the current direction and update position.
    ///
    /// The STEP pin is held high for the step delay, then released.
    pub fn step(&mut self) -> Result<()> {
        self.step_pin.set_high().map_err(|_| MotorError::PinError)?;
        self.delay.delay_us(self.step_delay_us);
        self.step_pin.set_low().map_err(|_| MotorError::PinError)?;

        self.position.advance(self.current_direction);
        Ok(())
    }

    /// Give back the pins and delay provider.
    pub fn release(self) -> (STEP, DIR, DELAY) {
        (self.step_pin, self.dir_pin, self.delay)
    }

    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if direction.dir_pin_high() {
            self.dir_pin.set_high().map_err(|_| MotorError::PinError)?;
        } else {
            self.dir_pin.set_low().map_err(|_| MotorError::PinError)?;
        }

        self.current_direction = direction;
        Ok(())
    }
}
