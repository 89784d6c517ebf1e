//! Motor module for angle-stepper.
//!
//! Provides the angle-commanded stepper driver and its position tracking.

mod builder;
mod driver;
mod position;

pub use builder::AngleStepperBuilder;
pub use driver::AngleStepper;
pub use position::Position;
