//! Per-step timing derived from commanded angular speed.

use crate::config::units::DegreesPerSec;
use crate::config::StepResolution;

/// Step pulse dwell time in microseconds at the given speed.
///
/// `angle_per_step / speed` seconds, evaluated on the fixed-point
/// resolution: micro-degrees per step divided by degrees per second is
/// microseconds per step. The result is truncated.
///
/// `speed` must be positive.
pub fn step_delay_us(resolution: &StepResolution, speed: DegreesPerSec) -> u32 {
    debug_assert!(speed.0 > 0.0, "max speed must be > 0");
    (resolution.micro_angle_per_step.0 as f32 / speed.0) as u32
}
