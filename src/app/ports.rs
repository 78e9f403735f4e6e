//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (ADC, buttons, LED/buzzer, OLED, delay source)
//! implement these traits. The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! Every peripheral operation is fallible: a [`PeripheralFault`] surfaced
//! through a port is fatal to the control loop (there is no retry layer).

use crate::error::PeripheralFault;

// ───────────────────────────────────────────────────────────────
// Boundary vocabulary
// ───────────────────────────────────────────────────────────────

/// Logical analog input channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalogChannel {
    Humidity,
    Temperature,
}

/// Operator buttons. `Disable` is button A, `Enable` is button B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Disable,
    Enable,
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the two analog channels.
pub trait SensorPort {
    /// Raw 12-bit sample (0–4095) from one logical channel.
    fn read_raw(&mut self, channel: AnalogChannel) -> Result<u16, PeripheralFault>;
}

/// Read-side port for the operator buttons.
pub trait InputPort {
    /// Instantaneous, debounce-free sample of one button.
    ///
    /// Adapters translate the active-low GPIO level (pressed = logic 0);
    /// callers see plain pressed/not-pressed.
    fn is_pressed(&mut self, button: Button) -> Result<bool, PeripheralFault>;
}

// ───────────────────────────────────────────────────────────────
// Actuator ports (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the LED and buzzer.
pub trait ActuatorPort {
    /// Write all three RGB channels at once. A partially-updated LED is
    /// not expressible through this port.
    fn set_led(&mut self, r: bool, g: bool, b: bool) -> Result<(), PeripheralFault>;

    /// Buzzer PWM level: 0 silences, anything else sounds the fixed
    /// 100 Hz carrier at that duty.
    fn set_buzzer_level(&mut self, duty: u16) -> Result<(), PeripheralFault>;

    /// Kill every actuator output — safe shutdown.
    fn all_off(&mut self) -> Result<(), PeripheralFault>;
}

/// Write-side port for the status display. The core only sequences
/// clear/draw/flush; pixel and protocol encoding belong to the panel
/// driver behind the adapter.
pub trait DisplayPort {
    /// Start a fresh frame.
    fn clear(&mut self) -> Result<(), PeripheralFault>;

    /// Draw text with its top-left corner at pixel (x, y).
    fn draw_text(&mut self, text: &str, x: u8, y: u8) -> Result<(), PeripheralFault>;

    /// Push the composed frame to the panel.
    fn flush(&mut self) -> Result<(), PeripheralFault>;
}

// ───────────────────────────────────────────────────────────────
// Clock port (loop pacing)
// ───────────────────────────────────────────────────────────────

/// Blocking delay source. The control loop is single-threaded and
/// cooperative; these delays are its only suspension points and always
/// run to completion.
pub trait ClockPort {
    fn delay_ms(&mut self, ms: u32);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / observability)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go (serial log today).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
