//! SSD1306 status display driver (128×64, I²C).
//!
//! Thin wrapper over the `ssd1306` buffered-graphics mode: the control
//! loop composes a frame with clear/draw_text and pushes it with flush.
//! Text uses the 6×10 monospace font, one line per 10-pixel row; pixel
//! and protocol encoding stay inside the panel crate.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: renders through `embedded-graphics` into the ssd1306
//! framebuffer over the I²C bus.
//! On host/test: records the composed frame in memory.

use crate::error::PeripheralFault;

#[cfg(target_os = "espidf")]
use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
#[cfg(target_os = "espidf")]
use esp_idf_hal::i2c::I2cDriver;
#[cfg(target_os = "espidf")]
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

#[cfg(target_os = "espidf")]
type Panel = Ssd1306<
    I2CInterface<I2cDriver<'static>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

pub struct OledDisplay {
    #[cfg(target_os = "espidf")]
    panel: Panel,
    #[cfg(not(target_os = "espidf"))]
    frame: Vec<(String, u8, u8)>,
}

#[cfg(target_os = "espidf")]
impl OledDisplay {
    /// Bring up the panel on an owned I²C bus.
    pub fn new(i2c: I2cDriver<'static>) -> Result<Self, PeripheralFault> {
        let interface = I2CDisplayInterface::new_custom_address(i2c, crate::pins::SSD1306_ADDR);
        let mut panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        panel.init().map_err(|_| PeripheralFault::DisplayBus)?;
        Ok(Self { panel })
    }

    pub fn clear(&mut self) -> Result<(), PeripheralFault> {
        self.panel.clear_buffer();
        Ok(())
    }

    pub fn draw_text(&mut self, text: &str, x: u8, y: u8) -> Result<(), PeripheralFault> {
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        // Framebuffer drawing is infallible; only flush touches the bus.
        let _ = Text::with_baseline(
            text,
            Point::new(i32::from(x), i32::from(y)),
            style,
            Baseline::Top,
        )
        .draw(&mut self.panel);
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), PeripheralFault> {
        self.panel.flush().map_err(|_| PeripheralFault::DisplayBus)
    }
}

#[cfg(not(target_os = "espidf"))]
impl OledDisplay {
    pub fn new() -> Self {
        Self { frame: Vec::new() }
    }

    pub fn clear(&mut self) -> Result<(), PeripheralFault> {
        self.frame.clear();
        Ok(())
    }

    pub fn draw_text(&mut self, text: &str, x: u8, y: u8) -> Result<(), PeripheralFault> {
        self.frame.push((text.to_owned(), x, y));
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), PeripheralFault> {
        Ok(())
    }

    /// Lines composed since the last clear (sim only).
    pub fn frame(&self) -> &[(String, u8, u8)] {
        &self.frame
    }
}
