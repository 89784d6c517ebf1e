//! Reading motor tables from TOML (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Truncate a message into the fixed-capacity error payload.
fn error_text(message: &str) -> heapless::String<128> {
    let mut text = heapless::String::new();
    for c in message.chars() {
        if text.push(c).is_err() {
            break;
        }
    }
    text
}

/// Read a motor table file and validate every motor in it.
///
/// # Errors
///
/// `IoError` when the file cannot be read; otherwise whatever
/// [`parse_config`] reports.
///
/// # Example
///
/// ```rust,ignore
/// use angle_stepper::load_config;
///
/// let motors = load_config("motors.toml")?;
/// let dial = motors.motor("dial");
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let text = fs::read_to_string(path.as_ref())
        .map_err(|e| Error::Config(ConfigError::IoError(error_text(&e.to_string()))))?;

    parse_config(&text)
}

/// Deserialize `[motors.<name>]` tables and validate every motor.
///
/// # Errors
///
/// `ParseError` for malformed TOML or unknown enum names, or the
/// validation error of the first motor with a bad parameter.
pub fn parse_config(text: &str) -> Result<SystemConfig> {
    let motors: SystemConfig = toml::from_str(text)
        .map_err(|e| Error::Config(ConfigError::ParseError(error_text(e.message()))))?;

    super::validation::validate_config(&motors)?;
    Ok(motors)
}
