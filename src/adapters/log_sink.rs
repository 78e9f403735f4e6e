//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the serial logger. A future display-mirroring or network adapter
//! would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | cycle={} | state={:?} | hum={}% temp={}C | alarm={}",
                    t.cycle,
                    t.state,
                    t.reading.humidity_pct,
                    t.reading.temperature_c,
                    if t.alarm_on { "ON" } else { "OFF" },
                );
            }
            AppEvent::StateChanged { from, to } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            AppEvent::SystemDisabled => {
                info!("LOCKOUT | engaged, outputs held in disabled representation");
            }
            AppEvent::SystemEnabled => {
                info!("LOCKOUT | released, classification resumes");
            }
            AppEvent::Started => {
                info!("START | controller entering poll loop");
            }
        }
    }
}
