//! Position tracking for angle-commanded steppers.
//!
//! Tracks the output angle in micro-degrees, the raw step counter and the
//! cumulative angle swept.

use crate::config::units::{MicroDegrees, Steps};
use crate::config::AngleMode;
use crate::motion::Direction;

/// Motor position tracker.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    /// Output shaft angle.
    micro_angle: MicroDegrees,
    /// Signed step counter, never wrapped.
    steps: Steps,
    /// Distance travelled since the last reset, in micro-degrees.
    micro_angle_swept: i64,
    /// Size of one step.
    micro_angle_per_step: MicroDegrees,
    /// Normalization range for `micro_angle`.
    angle_mode: AngleMode,
}

impl Position {
    /// Create a tracker at the origin.
    #[inline]
    pub fn new(micro_angle_per_step: MicroDegrees, angle_mode: AngleMode) -> Self {
        Self {
            micro_angle: MicroDegrees::default(),
            steps: Steps::default(),
            micro_angle_swept: 0,
            micro_angle_per_step,
            angle_mode,
        }
    }

    /// Current output angle.
    #[inline]
    pub fn micro_angle(&self) -> MicroDegrees {
        self.micro_angle
    }

    /// Current step counter.
    #[inline]
    pub fn steps(&self) -> Steps {
        self.steps
    }

    /// Distance travelled since the last reset, in micro-degrees.
    #[inline]
    pub fn micro_angle_swept(&self) -> i64 {
        self.micro_angle_swept
    }

    /// Overwrite the current angle without moving.
    #[inline]
    pub fn set_micro_angle(&mut self, angle: MicroDegrees) {
        self.micro_angle = angle;
    }

    /// Overwrite the step counter without moving.
    #[inline]
    pub fn set_steps(&mut self, steps: Steps) {
        self.steps = steps;
    }

    /// Zero the swept-angle accumulator.
    #[inline]
    pub fn reset_swept(&mut self) {
        self.micro_angle_swept = 0;
    }

    /// Account for one physical step in `direction`.
    pub fn advance(&mut self, direction: Direction) {
        let sign = direction.sign();
        self.steps = Steps(self.steps.0 + sign as i64);
        // Negative angles are never normalized, so long counter-clockwise runs
        // wrap around the i32 range.
        self.micro_angle = MicroDegrees(
            self.micro_angle
                .0
                .wrapping_add(sign.wrapping_mul(self.micro_angle_per_step.0)),
        );
        self.micro_angle_swept += self.micro_angle_per_step.0 as i64;
        self.normalize();
    }

    /// Single-band wrap at one revolution.
    ///
    /// Angles below zero are left as they are.
    fn normalize(&mut self) {
        match self.angle_mode {
            // TODO: give End180 its own [-180, 180) band once the reporting
            // convention for negative angles is settled.
            AngleMode::End360 | AngleMode::End180 => {
                if self.micro_angle >= MicroDegrees::FULL_REVOLUTION {
                    self.micro_angle = self.micro_angle - MicroDegrees::FULL_REVOLUTION;
                }
            }
        }
    }
}
