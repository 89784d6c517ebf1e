//! Recording fakes for the GPIO and delay capabilities.

use angle_stepper::{AngleStepper, MotorConfig};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

/// Output pin that records every level it is driven to.
#[derive(Debug, Default)]
pub struct RecordingPin {
    pub writes: Vec<bool>,
}

impl RecordingPin {
    pub fn is_high(&self) -> bool {
        self.writes.last().copied().unwrap_or(false)
    }

    pub fn pulses(&self) -> usize {
        self.writes.windows(2).filter(|w| !w[0] && w[1]).count()
    }
}

impl ErrorType for RecordingPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for RecordingPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.writes.push(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.writes.push(false);
        Ok(())
    }
}

/// Delay provider that records each requested dwell in microseconds.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub dwells_us: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.dwells_us.push(ns / 1_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.dwells_us.push(us);
    }
}

/// Pin whose writes always fail.
#[derive(Debug, Default)]
pub struct BrokenPin;

#[derive(Debug)]
pub struct BrokenPinError;

impl embedded_hal::digital::Error for BrokenPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

impl ErrorType for BrokenPin {
    type Error = BrokenPinError;
}

impl OutputPin for BrokenPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(BrokenPinError)
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(BrokenPinError)
    }
}

pub type FakeStepper = AngleStepper<RecordingPin, RecordingPin, RecordingDelay>;

/// Build a motor over recording fakes.
pub fn stepper(config: &MotorConfig) -> FakeStepper {
    AngleStepper::builder()
        .step_pin(RecordingPin::default())
        .dir_pin(RecordingPin::default())
        .delay(RecordingDelay::default())
        .from_motor_config(config)
        .build()
        .expect("fake pins never fail")
}
