//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the actuator drivers and the raw ADC/GPIO helpers, exposing them
//! through [`SensorPort`], [`InputPort`] and [`ActuatorPort`]. Together
//! with the display adapter this is the only code that touches actual
//! hardware. On non-espidf targets the underlying helpers are
//! simulation stubs driven through `hw_init::sim_*`.

use crate::app::ports::{ActuatorPort, AnalogChannel, Button, InputPort, SensorPort};
use crate::drivers::buzzer::Buzzer;
use crate::drivers::hw_init;
use crate::drivers::rgb_led::RgbLed;
use crate::error::PeripheralFault;
use crate::pins;

/// Concrete adapter that combines the board peripherals behind ports.
pub struct HardwareAdapter {
    led: RgbLed,
    buzzer: Buzzer,
}

impl HardwareAdapter {
    pub fn new(led: RgbLed, buzzer: Buzzer) -> Self {
        Self { led, buzzer }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_raw(&mut self, channel: AnalogChannel) -> Result<u16, PeripheralFault> {
        let adc_channel = match channel {
            AnalogChannel::Humidity => pins::HUMIDITY_ADC_CHANNEL,
            AnalogChannel::Temperature => pins::TEMPERATURE_ADC_CHANNEL,
        };
        hw_init::adc1_read(adc_channel)
    }
}

// ── InputPort implementation ──────────────────────────────────

impl InputPort for HardwareAdapter {
    fn is_pressed(&mut self, button: Button) -> Result<bool, PeripheralFault> {
        let pin = match button {
            Button::Disable => pins::BUTTON_DISABLE_GPIO,
            Button::Enable => pins::BUTTON_ENABLE_GPIO,
        };
        // Active-low switches: a press pulls the line to ground.
        Ok(!hw_init::gpio_read(pin)?)
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_led(&mut self, r: bool, g: bool, b: bool) -> Result<(), PeripheralFault> {
        self.led.set_channels(r, g, b)
    }

    fn set_buzzer_level(&mut self, duty: u16) -> Result<(), PeripheralFault> {
        self.buzzer.set_level(duty)
    }

    fn all_off(&mut self) -> Result<(), PeripheralFault> {
        self.led.off()?;
        self.buzzer.silence()
    }
}
