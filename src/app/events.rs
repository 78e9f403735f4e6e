//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other
//! side decide what to do with them — today that is the serial log.

use crate::classify::SystemState;
use crate::sensors::SensorReading;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The controller finished bootstrap and entered the poll loop.
    Started,

    /// The classified severity moved between cycles.
    StateChanged { from: SystemState, to: SystemState },

    /// Operator lockout engaged; actuators hold the disabled
    /// representation until re-enabled.
    SystemDisabled,

    /// Operator lockout released; classification resumes next cycle.
    SystemEnabled,

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging.
#[derive(Debug, Clone)]
pub struct TelemetryData {
    pub state: SystemState,
    pub reading: SensorReading,
    pub alarm_on: bool,
    pub cycle: u64,
}
