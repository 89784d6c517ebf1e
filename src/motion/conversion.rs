//! Angle to step-count conversion.
//!
//! Each entry point keeps its own rounding rule: absolute and fixed-point
//! relative moves truncate toward zero, floating-point relative moves round
//! half away from zero. The dropped remainder is not carried between calls.

use crate::config::units::{Degrees, MicroDegrees};
use crate::config::StepResolution;

use super::Direction;

/// Signed step count to reach an absolute target from the current angle.
///
/// No wrap-around handling: the sign of `target - current` picks the
/// direction, even when the other way round would be shorter.
pub fn steps_to_target(
    target: MicroDegrees,
    current: MicroDegrees,
    resolution: &StepResolution,
) -> i32 {
    let difference = target.0 as i64 - current.0 as i64;
    (difference / resolution.micro_angle_per_step.0 as i64) as i32
}

/// Signed step count for a relative move in degrees (rounded).
pub fn steps_for_delta(delta: Degrees, resolution: &StepResolution) -> i32 {
    libm::roundf(delta.0 / resolution.angle_per_step.0) as i32
}

/// Signed step count for a relative move in micro-degrees (truncated).
pub fn steps_for_micro_delta(delta: MicroDegrees, resolution: &StepResolution) -> i32 {
    delta.0 / resolution.micro_angle_per_step.0
}

/// Signed step count for one programmed "next" move.
///
/// The configured size is in motor steps, so the gear ratio is applied here;
/// the product is truncated.
pub fn next_step_count(size: u32, gear_ratio: f32, direction: Direction) -> i32 {
    let steps = (gear_ratio * size as f32) as i32;
    steps * direction.sign()
}
