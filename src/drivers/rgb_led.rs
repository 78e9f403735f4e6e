//! Discrete RGB status LED driver.
//!
//! Three plain GPIO outputs, one per colour channel. Severity colours
//! are mixed by switching channels on together (red + green = amber).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the three LED GPIOs.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::error::PeripheralFault;
use crate::pins;

pub struct RgbLed {
    current: (bool, bool, bool),
}

impl RgbLed {
    pub fn new() -> Self {
        Self {
            current: (false, false, false),
        }
    }

    /// Write all three channels in one call. Partial updates are not
    /// possible through this driver.
    pub fn set_channels(&mut self, r: bool, g: bool, b: bool) -> Result<(), PeripheralFault> {
        hw_init::gpio_write(pins::LED_R_GPIO, r)?;
        hw_init::gpio_write(pins::LED_G_GPIO, g)?;
        hw_init::gpio_write(pins::LED_B_GPIO, b)?;
        self.current = (r, g, b);
        Ok(())
    }

    pub fn off(&mut self) -> Result<(), PeripheralFault> {
        self.set_channels(false, false, false)
    }

    pub fn current_channels(&self) -> (bool, bool, bool) {
        self.current
    }
}
