//! Unified error types for the EnviroMon firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! control loop's error handling uniform. All variants are `Copy` so they
//! can be passed through the loop without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A peripheral operation failed mid-cycle.
    Peripheral(PeripheralFault),
    /// Peripheral bring-up failed before the loop started.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Peripheral(e) => write!(f, "peripheral: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Peripheral faults
// ---------------------------------------------------------------------------

/// Runtime peripheral failures.
///
/// There is no recovery path for these: the control loop forces the
/// disabled actuator representation and halts, leaving the task watchdog
/// to reset the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeripheralFault {
    /// ADC oneshot read returned an error.
    AdcReadFailed,
    /// Raw sample exceeded the 12-bit ADC domain.
    AdcOutOfRange,
    /// GPIO level read failed.
    GpioReadFailed,
    /// GPIO level write failed.
    GpioWriteFailed,
    /// LEDC duty write failed.
    PwmWriteFailed,
    /// I²C transaction with the status display failed.
    DisplayBus,
}

impl fmt::Display for PeripheralFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdcReadFailed => write!(f, "ADC read failed"),
            Self::AdcOutOfRange => write!(f, "ADC sample out of range"),
            Self::GpioReadFailed => write!(f, "GPIO read failed"),
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
            Self::PwmWriteFailed => write!(f, "PWM write failed"),
            Self::DisplayBus => write!(f, "display bus error"),
        }
    }
}

impl std::error::Error for PeripheralFault {}

impl From<PeripheralFault> for Error {
    fn from(e: PeripheralFault) -> Self {
        Self::Peripheral(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
