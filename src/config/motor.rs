//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::modes::{AngleMode, StepMode};
use super::units::DegreesPerSec;
use crate::motion::Direction;

/// Complete configuration of one angle-commanded motor.
///
/// Every field except `name` has a default, so the smallest useful
/// configuration is an empty table (200 steps/rev, no gearing, full step).
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name (max 32 chars).
    #[serde(default)]
    pub name: String<32>,

    /// Microstep subdivision set on the driver.
    #[serde(default)]
    pub step_mode: StepMode,

    /// Range the reported angle is normalized into.
    #[serde(default)]
    pub angle_mode: AngleMode,

    /// Full steps per motor shaft revolution (200 for 1.8° motors).
    #[serde(default = "default_steps_per_revolution")]
    pub steps_per_revolution: u16,

    /// Reduction between motor shaft and output shaft (4.0 means 4:1).
    #[serde(default = "default_gear_ratio")]
    pub gear_ratio: f32,

    /// Initial commanded speed in degrees per second.
    #[serde(default = "default_max_speed", rename = "max_speed_deg_per_sec")]
    pub max_speed: DegreesPerSec,

    /// Step count taken by `move_to_next`; one full step when unset.
    #[serde(default)]
    pub next_step_size: Option<u32>,

    /// Direction taken by `move_to_next`.
    #[serde(default)]
    pub next_direction: Direction,
}

fn default_steps_per_revolution() -> u16 {
    200
}

fn default_gear_ratio() -> f32 {
    1.0
}

fn default_max_speed() -> DegreesPerSec {
    DegreesPerSec(10.0)
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            step_mode: StepMode::default(),
            angle_mode: AngleMode::default(),
            steps_per_revolution: default_steps_per_revolution(),
            gear_ratio: default_gear_ratio(),
            max_speed: default_max_speed(),
            next_step_size: None,
            next_direction: Direction::default(),
        }
    }
}

impl MotorConfig {
    /// Microsteps per motor shaft revolution (`steps_per_revolution << step_mode`).
    pub fn microsteps_per_revolution(&self) -> u32 {
        (self.steps_per_revolution as u32) << self.step_mode.shift()
    }

    /// Step count used by `move_to_next`, falling back to one full step.
    pub fn effective_next_step_size(&self) -> u32 {
        self.next_step_size
            .unwrap_or_else(|| self.step_mode.microsteps())
    }
}
