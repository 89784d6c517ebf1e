//! Motion module for angle-stepper.
//!
//! Conversions from angles to signed step counts, direction encoding, and
//! step timing.

pub mod conversion;
mod direction;
pub mod timing;

pub use direction::Direction;
