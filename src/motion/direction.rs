//! Direction of travel and its DIR pin encoding.

use serde::Deserialize;

/// Direction of motor motion.
///
/// The DIR line polarity is fixed: low for clockwise, high for
/// counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise (non-negative step count, DIR low).
    #[default]
    #[serde(rename = "cw")]
    Clockwise,
    /// Counter-clockwise (negative step count, DIR high).
    #[serde(rename = "ccw")]
    CounterClockwise,
}

impl Direction {
    /// Get direction from a signed step count.
    ///
    /// Zero counts as clockwise.
    #[inline]
    pub fn from_steps(steps: i32) -> Self {
        if steps < 0 {
            Direction::CounterClockwise
        } else {
            Direction::Clockwise
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    /// Level the DIR pin must be driven to (`true` = high).
    #[inline]
    pub fn dir_pin_high(self) -> bool {
        matches!(self, Direction::CounterClockwise)
    }
}
