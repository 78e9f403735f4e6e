//! Operator lockout controller.
//!
//! Two momentary buttons gate the control pipeline: button A requests a
//! disable, button B re-enables a disabled system. A raw "pressed"
//! sample counts only when corroborated by a second sample taken one
//! debounce interval later; a lone sample is switch noise and simply
//! defers the transition to the next confirmed pair.
//!
//! ## Transition rules
//!
//! | From     | Trigger                       | To       |
//! |----------|-------------------------------|----------|
//! | Enabled  | button A pressed, 2 samples   | Disabled |
//! | Disabled | button B pressed, 2 samples   | Enabled  |
//!
//! The disable request is polled every cycle, even while already
//! disabled (re-confirming re-enters the disabled branch). The enable
//! request is only polled while disabled.

use log::info;

use crate::app::ports::{Button, ClockPort, InputPort};
use crate::config::SystemConfig;
use crate::error::PeripheralFault;

/// Owns the process-wide enabled flag and the debounce policy.
pub struct LockoutController {
    enabled: bool,
    debounce_ms: u32,
    enable_settle_ms: u32,
}

impl LockoutController {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            enabled: true,
            debounce_ms: config.debounce_ms,
            enable_settle_ms: config.enable_settle_ms,
        }
    }

    /// Whether the control pipeline may run this cycle.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Poll the disable request (button A).
    ///
    /// Returns `true` when a confirmed press forced (or re-asserted) the
    /// disabled state; the caller then applies the disabled actuator
    /// representation and pauses before resuming the loop.
    pub fn poll_disable(
        &mut self,
        io: &mut impl InputPort,
        clock: &mut impl ClockPort,
    ) -> Result<bool, PeripheralFault> {
        if !self.confirmed_press(Button::Disable, io, clock)? {
            return Ok(false);
        }
        if self.enabled {
            info!("lockout: disable confirmed, gating control pipeline");
        }
        self.enabled = false;
        Ok(true)
    }

    /// Poll the enable request (button B). Only meaningful while
    /// disabled.
    ///
    /// On confirmation, waits the settle interval (giving the operator
    /// time to release the switch) and then flips the flag. The caller
    /// resumes classification on its next cycle.
    pub fn poll_enable(
        &mut self,
        io: &mut impl InputPort,
        clock: &mut impl ClockPort,
    ) -> Result<bool, PeripheralFault> {
        if self.enabled {
            return Ok(false);
        }
        if !self.confirmed_press(Button::Enable, io, clock)? {
            return Ok(false);
        }
        clock.delay_ms(self.enable_settle_ms);
        self.enabled = true;
        info!("lockout: enable confirmed, classification resumes next cycle");
        Ok(true)
    }

    /// Double-sample debounce: pressed now AND still pressed one
    /// debounce interval later. An unpressed first sample returns
    /// immediately without delaying.
    fn confirmed_press(
        &self,
        button: Button,
        io: &mut impl InputPort,
        clock: &mut impl ClockPort,
    ) -> Result<bool, PeripheralFault> {
        if !io.is_pressed(button)? {
            return Ok(false);
        }
        clock.delay_ms(self.debounce_ms);
        io.is_pressed(button)
    }
}
