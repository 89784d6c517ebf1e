//! Angular resolution derived from motor configuration.

use super::motor::MotorConfig;
use super::units::{Degrees, MicroDegrees, MICRO_PER_DEGREE};

/// Per-step angular resolution of the output shaft.
///
/// Computed once at construction; gear ratio and microstepping are both
/// folded in here, so every later angle/step conversion applies them once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepResolution {
    /// Output angle of one full motor step.
    pub angle_per_full_step: Degrees,

    /// Output angle of one microstep (the finest addressable increment).
    pub angle_per_step: Degrees,

    /// `angle_per_step` rounded to integer micro-degrees.
    pub micro_angle_per_step: MicroDegrees,
}

impl StepResolution {
    /// Derive the resolution from raw motor geometry.
    ///
    /// `microsteps_per_revolution` is the full step count multiplied by the
    /// step mode subdivision. All three inputs must be positive; zero yields
    /// infinite angles.
    pub fn new(
        steps_per_revolution: u16,
        microsteps_per_revolution: u32,
        gear_ratio: f32,
    ) -> Self {
        let full_steps = steps_per_revolution as f32;
        let microsteps = microsteps_per_revolution as f32;

        let angle_per_full_step = 360.0 / (full_steps * gear_ratio);
        let angle_per_step = 360.0 / (microsteps * gear_ratio);
        let micro_angle_per_step = libm::roundf(angle_per_step * MICRO_PER_DEGREE) as i32;

        Self {
            angle_per_full_step: Degrees(angle_per_full_step),
            angle_per_step: Degrees(angle_per_step),
            micro_angle_per_step: MicroDegrees(micro_angle_per_step),
        }
    }

    /// Derive the resolution from a motor configuration.
    pub fn from_config(config: &MotorConfig) -> Self {
        Self::new(
            config.steps_per_revolution,
            config.microsteps_per_revolution(),
            config.gear_ratio,
        )
    }
}
