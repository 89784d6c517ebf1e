//! # angle-stepper
//!
//! Drive a STEP/DIR stepper driver in output-shaft angles instead of steps.
//!
//! ## Features
//!
//! - **Angle commands**: absolute and relative moves in degrees or fixed-point
//!   micro-degrees
//! - **embedded-hal 1.0**: Uses `OutputPin` for STEP/DIR, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//! - **Gearing and microstepping**: Folded into a single per-step resolution
//! - **Drift-free tracking**: Position kept in integer micro-degrees
//! - **Configuration files**: Motors described in TOML (with `std`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use angle_stepper::{AngleStepper, Degrees, DegreesPerSec, StepMode};
//!
//! let mut motor = AngleStepper::builder()
//!     .step_pin(step_pin)
//!     .dir_pin(dir_pin)
//!     .delay(delay)
//!     .step_mode(StepMode::Eighth)
//!     .gear_ratio(4.0)
//!     .build()?;
//!
//! motor.set_max_speed(DegreesPerSec(90.0));
//! motor.move_to(Degrees(45.0))?;
//! motor.move_by(Degrees(-10.0))?;
//! ```
//!
//! Motion commands block until every pulse has been emitted. Each pulse
//! holds STEP high for `angle_per_step / max_speed`.
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod motion;
pub mod motor;

pub use config::{
    validate_config, AngleMode, MotorConfig, StepMode, StepResolution, SystemConfig,
};
pub use error::{Error, Result};
pub use motion::Direction;
pub use motor::{AngleStepper, AngleStepperBuilder};

#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

pub use config::units::{Degrees, DegreesPerSec, MicroDegrees, Steps, UnitExt, MicroUnitExt};
