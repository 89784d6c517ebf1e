//! Driver step modes and angle reporting modes.

use serde::Deserialize;

/// Microstep subdivision selected on the driver.
///
/// The discriminant is the power of two the full step is divided by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum StepMode {
    /// Full step.
    #[default]
    Full = 0,
    /// Half step.
    Half = 1,
    /// Quarter step.
    Quarter = 2,
    /// Eighth step.
    Eighth = 3,
}

impl StepMode {
    /// Shift applied to the full-step count (`2^shift` microsteps per full step).
    #[inline]
    pub const fn shift(self) -> u32 {
        self as u32
    }

    /// Number of microsteps per full step.
    #[inline]
    pub const fn microsteps(self) -> u32 {
        1 << self.shift()
    }
}

/// Range the reported angle is normalized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum AngleMode {
    /// Angle wraps into `[0, 360)`.
    #[default]
    End360,
    /// Declared for `[-180, 180)` reporting but not implemented: positions
    /// are normalized exactly as with [`AngleMode::End360`].
    End180,
}
