//! Unit types for angular quantities.
//!
//! Positions are tracked in integer micro-degrees so that stepping never
//! accumulates floating-point drift; degrees are only the caller-facing unit.

use core::ops::{Add, Neg, Sub};

use serde::Deserialize;

/// Micro-degrees in one degree.
pub const MICRO_PER_DEGREE: f32 = 1e6;

/// Angular position or displacement in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Convert to micro-degrees, truncating toward zero.
    #[inline]
    pub fn to_micro(self) -> MicroDegrees {
        MicroDegrees((self.0 * MICRO_PER_DEGREE) as i32)
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Degrees {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Angular position or displacement in micro-degrees (1e-6 degree).
///
/// `i32` covers roughly ±2147 degrees. Arithmetic wraps on overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct MicroDegrees(pub i32);

impl MicroDegrees {
    /// One full revolution.
    pub const FULL_REVOLUTION: Self = Self(360_000_000);

    /// Create a new MicroDegrees value.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Convert to floating-point degrees.
    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0 as f32 / MICRO_PER_DEGREE)
    }
}

impl Add for MicroDegrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for MicroDegrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for MicroDegrees {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.wrapping_neg())
    }
}

/// Angular speed in degrees per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct DegreesPerSec(pub f32);

impl DegreesPerSec {
    /// Create a new DegreesPerSec value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Motor position in steps (signed, unbounded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Steps(pub i64);

impl Steps {
    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Degrees.
    fn degrees(self) -> Degrees;
    /// Convert to DegreesPerSec.
    fn degrees_per_sec(self) -> DegreesPerSec;
}

impl UnitExt for f32 {
    #[inline]
    fn degrees(self) -> Degrees {
        Degrees(self)
    }

    #[inline]
    fn degrees_per_sec(self) -> DegreesPerSec {
        DegreesPerSec(self)
    }
}

/// Extension trait for fixed-point angles.
pub trait MicroUnitExt {
    /// Convert to MicroDegrees.
    fn micro_degrees(self) -> MicroDegrees;
}

impl MicroUnitExt for i32 {
    #[inline]
    fn micro_degrees(self) -> MicroDegrees {
        MicroDegrees(self)
    }
}
