//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the sensor hub, the lockout controller, and the
//! last classification. It exposes one `run_cycle` operation that the
//! main loop repeats forever; every port is injected at the call site,
//! so the whole control loop runs against mocks on the host.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ ActuatorPort
//!  InputPort  ──▶ │       AppService        │ ──▶ DisplayPort
//!  ClockPort  ──▶ │  Classify · Lockout     │ ──▶ EventSink
//!                 └────────────────────────┘
//! ```

use core::fmt::Write as _;

use heapless::String;
use log::{info, warn};

use crate::classify::{classify, SystemState};
use crate::config::SystemConfig;
use crate::error::Result;
use crate::lockout::LockoutController;
use crate::sensors::{SensorHub, SensorReading};

use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, ClockPort, DisplayPort, EventSink, InputPort, SensorPort};

// Status frame layout: pixel rows for the 6×10 font, one line each.
const ROW_STATE: u8 = 0;
const ROW_HUMIDITY: u8 = 10;
const ROW_TEMPERATURE: u8 = 20;
const ROW_ALARM: u8 = 30;
const COL_LEFT: u8 = 0;

/// One display line. Fits "State: Critical" with headroom.
type Line = String<24>;

/// The application service orchestrates all domain logic.
pub struct AppService {
    config: SystemConfig,
    hub: SensorHub,
    lockout: LockoutController,
    /// Last classified severity. `None` before the first enabled cycle
    /// and while the system is disabled.
    state: Option<SystemState>,
    last_reading: SensorReading,
    cycle_count: u64,
}

impl AppService {
    /// Construct the service from configuration. The system starts
    /// enabled; call [`start`](Self::start) before the first cycle.
    pub fn new(config: SystemConfig) -> Self {
        let lockout = LockoutController::new(&config);
        Self {
            config,
            hub: SensorHub::new(),
            lockout,
            state: None,
            last_reading: SensorReading::default(),
            cycle_count: 0,
        }
    }

    /// Announce startup. Call once before the first `run_cycle`.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!("AppService started (enabled, awaiting first sample)");
    }

    /// Run one full control cycle: override check → sensors → classify →
    /// actuators → fixed delay.
    ///
    /// The `hw` parameter satisfies the sensor, input, and actuator
    /// ports at once: one mutable borrow covers the whole peripheral
    /// adapter, while the port boundary stays explicit.
    pub fn run_cycle(
        &mut self,
        hw: &mut (impl SensorPort + InputPort + ActuatorPort),
        display: &mut impl DisplayPort,
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        self.cycle_count += 1;

        // 1. The disable request gates everything and is polled every
        //    cycle, even while already disabled.
        if self.lockout.poll_disable(hw, clock)? {
            self.apply_disabled(hw, display)?;
            self.state = None;
            sink.emit(&AppEvent::SystemDisabled);
            clock.delay_ms(self.config.disable_settle_ms);
            return Ok(());
        }

        // 2. While disabled: watch for the enable request and keep the
        //    disabled representation asserted. Even on a confirmed
        //    enable, this cycle still shows the disabled frame;
        //    classification resumes on the next cycle.
        if !self.lockout.is_enabled() {
            if self.lockout.poll_enable(hw, clock)? {
                sink.emit(&AppEvent::SystemEnabled);
            }
            self.apply_disabled(hw, display)?;
            clock.delay_ms(self.config.loop_period_ms);
            return Ok(());
        }

        // 3. Normal pipeline: sample → classify → synchronise actuators.
        let reading = self.hub.read_all(hw)?;
        self.last_reading = reading;

        let next = classify(reading, &self.config);
        match self.state {
            Some(prev) if prev != next => {
                if next == SystemState::Critical {
                    warn!(
                        "severity {:?} -> {:?} (hum {}%, temp {}C)",
                        prev, next, reading.humidity_pct, reading.temperature_c
                    );
                } else {
                    info!("severity {:?} -> {:?}", prev, next);
                }
                sink.emit(&AppEvent::StateChanged {
                    from: prev,
                    to: next,
                });
            }
            None => info!(
                "severity {:?} (hum {}%, temp {}C)",
                next, reading.humidity_pct, reading.temperature_c
            ),
            _ => {}
        }
        self.state = Some(next);

        self.apply_actuators(next, reading, hw, display)?;

        if self.cycle_count % u64::from(self.config.telemetry_every_cycles) == 0 {
            sink.emit(&AppEvent::Telemetry(TelemetryData {
                state: next,
                reading,
                alarm_on: next.alarm_on(),
                cycle: self.cycle_count,
            }));
        }

        clock.delay_ms(self.config.loop_period_ms);
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    /// Last classified severity, if the pipeline has run.
    pub fn state(&self) -> Option<SystemState> {
        self.state
    }

    /// Whether the operator lockout currently permits classification.
    pub fn is_enabled(&self) -> bool {
        self.lockout.is_enabled()
    }

    /// Most recent sensor reading (boot placeholder before the first).
    pub fn last_reading(&self) -> SensorReading {
        self.last_reading
    }

    /// Total control cycles executed since startup.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    // ── Internal ──────────────────────────────────────────────

    /// Drive every actuator to the representation for `state`. Repeating
    /// the call with the same inputs produces the same port-call
    /// sequence; nothing here depends on previous actuator state.
    fn apply_actuators(
        &self,
        state: SystemState,
        reading: SensorReading,
        hw: &mut impl ActuatorPort,
        display: &mut impl DisplayPort,
    ) -> Result<()> {
        let (r, g, b) = state.led_channels();
        hw.set_led(r, g, b)?;
        hw.set_buzzer_level(if state.alarm_on() {
            self.config.buzzer_on_duty
        } else {
            0
        })?;
        self.render_status(state, reading, display)
    }

    /// Disabled representation: everything dark and silent, fixed banner.
    fn apply_disabled(
        &self,
        hw: &mut impl ActuatorPort,
        display: &mut impl DisplayPort,
    ) -> Result<()> {
        hw.set_led(false, false, false)?;
        hw.set_buzzer_level(0)?;
        display.clear()?;
        display.draw_text("System", COL_LEFT, ROW_STATE)?;
        display.draw_text("disabled", COL_LEFT, ROW_HUMIDITY)?;
        display.flush()?;
        Ok(())
    }

    /// Compose and push the four-line status frame.
    fn render_status(
        &self,
        state: SystemState,
        reading: SensorReading,
        display: &mut impl DisplayPort,
    ) -> Result<()> {
        display.clear()?;

        let mut line = Line::new();
        let _ = write!(line, "State: {}", state.label());
        display.draw_text(&line, COL_LEFT, ROW_STATE)?;

        line.clear();
        let _ = write!(line, "Hum: {}%", reading.humidity_pct);
        display.draw_text(&line, COL_LEFT, ROW_HUMIDITY)?;

        line.clear();
        let _ = write!(line, "Temp: {}C", reading.temperature_c);
        display.draw_text(&line, COL_LEFT, ROW_TEMPERATURE)?;

        let alarm = if state.alarm_on() {
            "Buzzer: ON"
        } else {
            "Buzzer: OFF"
        };
        display.draw_text(alarm, COL_LEFT, ROW_ALARM)?;

        display.flush()?;
        Ok(())
    }
}
