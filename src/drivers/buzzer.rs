//! Piezo buzzer driver.
//!
//! One LEDC PWM channel on a fixed 100 Hz carrier. Duty 0 is silent;
//! the alarm drives a 50 % mid-level. Frequency is set once at init and
//! never changed at runtime.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the LEDC duty register via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::error::PeripheralFault;
use crate::pins;

pub struct Buzzer {
    level: u16,
}

impl Buzzer {
    pub fn new() -> Self {
        Self { level: 0 }
    }

    /// Set the PWM level. Values above full scale are clamped.
    pub fn set_level(&mut self, duty: u16) -> Result<(), PeripheralFault> {
        let duty = duty.min(pins::BUZZER_DUTY_MAX);
        hw_init::ledc_set_buzzer(duty)?;
        self.level = duty;
        Ok(())
    }

    pub fn silence(&mut self) -> Result<(), PeripheralFault> {
        self.set_level(0)
    }

    pub fn is_sounding(&self) -> bool {
        self.level > 0
    }

    pub fn current_level(&self) -> u16 {
        self.level
    }
}
