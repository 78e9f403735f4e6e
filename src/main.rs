//! EnviroMon Firmware — Main Entry Point
//!
//! Hexagonal architecture around a fixed-period polling loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                 │
//! │                                                        │
//! │  HardwareAdapter      OledAdapter      SystemClock     │
//! │  (Sensor+Input+       (DisplayPort)    (ClockPort)     │
//! │   Actuator ports)     LogEventSink     (EventSink)     │
//! │                                                        │
//! │  ──────────── Port Trait Boundary ─────────────        │
//! │                                                        │
//! │  ┌──────────────────────────────────────────────┐      │
//! │  │           AppService (pure logic)            │      │
//! │  │  Classifier · Lockout · Actuator sync        │      │
//! │  └──────────────────────────────────────────────┘      │
//! └────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::{error, info};

use enviromon::adapters::clock::SystemClock;
use enviromon::adapters::hardware::HardwareAdapter;
use enviromon::adapters::log_sink::LogEventSink;
use enviromon::adapters::oled::OledAdapter;
use enviromon::app::ports::ActuatorPort;
use enviromon::app::service::AppService;
use enviromon::config::SystemConfig;
use enviromon::drivers::buzzer::Buzzer;
use enviromon::drivers::display::OledDisplay;
use enviromon::drivers::hw_init;
use enviromon::drivers::rgb_led::RgbLed;
use enviromon::drivers::watchdog::Watchdog;
use enviromon::pins;

use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::FromValueType;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("EnviroMon v{} starting", env!("CARGO_PKG_VERSION"));

    // ── 2. One-shot peripheral bring-up ───────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Bring-up failure is critical: log and halt. The un-fed task
        // watchdog resets the board, which is the retry path.
        error!("HAL init failed: {e}, halting");
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = Watchdog::new();

    // ── 3. I²C bus + status display ───────────────────────────
    let peripherals = Peripherals::take()?;
    let i2c_config = I2cConfig::new().baudrate(pins::I2C_FREQ_HZ.Hz().into());
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio14,
        peripherals.pins.gpio15,
        &i2c_config,
    )?;
    let panel = OledDisplay::new(i2c)?;

    // ── 4. Adapters + application service ─────────────────────
    let mut hw = HardwareAdapter::new(RgbLed::new(), Buzzer::new());
    let mut display = OledAdapter::new(panel);
    let mut clock = SystemClock::new();
    let mut sink = LogEventSink::new();

    let config = SystemConfig::default();
    let mut app = AppService::new(config);
    app.start(&mut sink);

    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        if let Err(e) = app.run_cycle(&mut hw, &mut display, &mut clock, &mut sink) {
            // Peripheral faults have no recovery path: force outputs to
            // the safe representation, stop feeding the watchdog, and
            // let it reset the board.
            error!("peripheral fault: {e}, forcing safe state and halting");
            let _ = hw.all_off();
            #[allow(clippy::empty_loop)]
            loop {}
        }
        watchdog.feed();
    }
}
