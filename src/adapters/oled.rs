//! Display adapter — [`DisplayPort`] over the SSD1306 driver.

use crate::app::ports::DisplayPort;
use crate::drivers::display::OledDisplay;
use crate::error::PeripheralFault;

pub struct OledAdapter {
    driver: OledDisplay,
}

impl OledAdapter {
    pub fn new(driver: OledDisplay) -> Self {
        Self { driver }
    }
}

impl DisplayPort for OledAdapter {
    fn clear(&mut self) -> Result<(), PeripheralFault> {
        self.driver.clear()
    }

    fn draw_text(&mut self, text: &str, x: u8, y: u8) -> Result<(), PeripheralFault> {
        self.driver.draw_text(text, x, y)
    }

    fn flush(&mut self) -> Result<(), PeripheralFault> {
        self.driver.flush()
    }
}
