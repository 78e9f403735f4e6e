//! System clock adapter.
//!
//! Provides the blocking fixed-period delays that pace the control loop.
//!
//! - **`target_os = "espidf"`** — FreeRTOS task delay (yields the CPU to
//!   the idle task, keeping the task watchdog happy).
//! - **`not(target_os = "espidf")`** — `std::thread::sleep` for host-side
//!   runs.

use crate::app::ports::ClockPort;

pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    #[cfg(target_os = "espidf")]
    fn delay_ms(&mut self, ms: u32) {
        esp_idf_hal::delay::FreeRtos::delay_ms(ms);
    }

    #[cfg(not(target_os = "espidf"))]
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
