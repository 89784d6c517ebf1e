//! Configuration module for angle-stepper.
//!
//! Provides the motor configuration structure, the resolution derived from
//! it, and loading/validation of TOML configuration files (with `std`).

mod modes;
mod motor;
mod resolution;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use modes::{AngleMode, StepMode};
pub use motor::MotorConfig;
pub use resolution::StepResolution;
pub use system::SystemConfig;
pub use validation::{validate_config, validate_motor};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, DegreesPerSec, MicroDegrees, Steps};
