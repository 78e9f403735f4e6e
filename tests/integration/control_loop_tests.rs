//! Integration tests for the run_cycle → classifier → actuator pipeline.
//!
//! These run on the host and verify the full chain from raw ADC samples
//! down to actuator and display calls without any real hardware.

use crate::mock_hw::{DisplayCall, MockClock, MockDisplay, MockHardware, RecordingSink};

use enviromon::app::events::AppEvent;
use enviromon::app::service::AppService;
use enviromon::classify::SystemState;
use enviromon::config::SystemConfig;
use enviromon::error::{Error, PeripheralFault};

struct Rig {
    app: AppService,
    hw: MockHardware,
    display: MockDisplay,
    clock: MockClock,
    sink: RecordingSink,
}

fn make_rig() -> Rig {
    make_rig_with(SystemConfig::default())
}

fn make_rig_with(config: SystemConfig) -> Rig {
    let mut app = AppService::new(config);
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    Rig {
        app,
        hw: MockHardware::new(),
        display: MockDisplay::new(),
        clock: MockClock::new(),
        sink,
    }
}

impl Rig {
    fn cycle(&mut self) {
        self.app
            .run_cycle(&mut self.hw, &mut self.display, &mut self.clock, &mut self.sink)
            .expect("cycle should succeed");
    }
}

// ── Severity → actuator representation ────────────────────────

#[test]
fn normal_reading_lights_green_and_silences_buzzer() {
    let mut rig = make_rig();
    // Defaults: 68 % humidity, 17 °C.
    rig.cycle();

    assert_eq!(rig.app.state(), Some(SystemState::Normal));
    assert_eq!(rig.hw.led_state(), Some((false, true, false)));
    assert_eq!(rig.hw.buzzer_level(), Some(0));
}

#[test]
fn critical_temperature_sounds_the_alarm() {
    let mut rig = make_rig();
    rig.hw.temperature_raw = 4095; // 35 °C > 34
    rig.cycle();

    assert_eq!(rig.app.state(), Some(SystemState::Critical));
    assert_eq!(rig.hw.led_state(), Some((true, false, false)));
    assert_eq!(rig.hw.buzzer_level(), Some(2048));
}

#[test]
fn low_humidity_is_critical() {
    let mut rig = make_rig();
    rig.hw.humidity_raw = 1000; // 19 % < 30
    rig.cycle();

    assert_eq!(rig.app.state(), Some(SystemState::Critical));
    assert_eq!(rig.hw.led_state(), Some((true, false, false)));
    assert_eq!(rig.hw.buzzer_level(), Some(2048));
}

#[test]
fn alert_band_shows_amber_without_alarm() {
    let mut rig = make_rig();
    rig.hw.temperature_raw = 3600; // 30 °C, inside the 30–33 band
    rig.cycle();

    assert_eq!(rig.app.state(), Some(SystemState::Alert));
    assert_eq!(rig.hw.led_state(), Some((true, true, false)));
    assert_eq!(rig.hw.buzzer_level(), Some(0));
}

// ── Rule precedence (overlapping bands) ───────────────────────

#[test]
fn temperature_band_outranks_normal_humidity() {
    let mut rig = make_rig();
    rig.hw.humidity_raw = 3072; // 60 %, "normal" humidity
    rig.hw.temperature_raw = 3627; // 31 °C, Alert band
    rig.cycle();

    // Humidity alone would read Normal, but the Alert band is checked
    // before falling through: rule order wins.
    assert_eq!(rig.app.state(), Some(SystemState::Alert));
}

#[test]
fn band_gap_falls_back_to_normal() {
    let mut rig = make_rig();
    rig.hw.humidity_raw = 3072; // 60 %
    rig.hw.temperature_raw = 3978; // 34 °C, above the Alert band yet not Critical
    rig.cycle();

    // Documented fallback behaviour of the first-match-wins rules.
    assert_eq!(rig.app.state(), Some(SystemState::Normal));
}

// ── Display frame ─────────────────────────────────────────────

#[test]
fn status_frame_has_fixed_four_line_layout() {
    let mut rig = make_rig();
    rig.cycle();

    assert_eq!(
        rig.display.frame_lines(),
        vec![
            ("State: Normal".to_owned(), 0, 0),
            ("Hum: 68%".to_owned(), 0, 10),
            ("Temp: 17C".to_owned(), 0, 20),
            ("Buzzer: OFF".to_owned(), 0, 30),
        ]
    );
    assert_eq!(rig.display.last_frame().last(), Some(&DisplayCall::Flush));
}

#[test]
fn critical_frame_reports_buzzer_on() {
    let mut rig = make_rig();
    rig.hw.temperature_raw = 4095;
    rig.cycle();

    let lines = rig.display.frame_lines();
    assert_eq!(lines[0].0, "State: Critical");
    assert_eq!(lines[3].0, "Buzzer: ON");
}

#[test]
fn scaling_round_trip_shows_in_frame_text() {
    let mut rig = make_rig();
    rig.hw.humidity_raw = 0;
    rig.hw.temperature_raw = 2048; // 2048 * 35 / 4095 = 17 (floor)
    rig.cycle();

    let lines = rig.display.frame_lines();
    assert_eq!(lines[1].0, "Hum: 0%");
    assert_eq!(lines[2].0, "Temp: 17C");
    // 0 % humidity is Critical, so the representation follows.
    assert_eq!(lines[0].0, "State: Critical");
}

// ── Idempotence ───────────────────────────────────────────────

#[test]
fn actuator_sync_is_idempotent_across_cycles() {
    let mut rig = make_rig();
    rig.cycle();
    let calls_first = rig.hw.calls.clone();
    let frame_first = rig.display.last_frame();

    rig.cycle();
    let calls_second = rig.hw.calls[calls_first.len()..].to_vec();
    let frame_second = rig.display.last_frame();

    assert_eq!(calls_first, calls_second);
    assert_eq!(frame_first, frame_second);
    assert_eq!(rig.display.flush_count(), 2);
}

// ── Events and pacing ─────────────────────────────────────────

#[test]
fn severity_change_emits_state_changed_event() {
    let mut rig = make_rig();
    rig.cycle(); // first classification, no transition event
    assert!(
        !rig.sink
            .events
            .iter()
            .any(|e| matches!(e, AppEvent::StateChanged { .. }))
    );

    rig.hw.temperature_raw = 4095;
    rig.cycle();
    assert!(rig.sink.events.iter().any(|e| matches!(
        e,
        AppEvent::StateChanged {
            from: SystemState::Normal,
            to: SystemState::Critical,
        }
    )));
}

#[test]
fn telemetry_emitted_on_configured_cadence() {
    let mut config = SystemConfig::default();
    config.telemetry_every_cycles = 2;
    let mut rig = make_rig_with(config);

    for _ in 0..4 {
        rig.cycle();
    }
    assert_eq!(rig.sink.count_telemetry(), 2);
}

#[test]
fn each_cycle_sleeps_one_loop_period() {
    let mut rig = make_rig();
    rig.cycle();
    assert_eq!(rig.clock.delays, vec![200]);
}

// ── Fault propagation ─────────────────────────────────────────

#[test]
fn adc_fault_propagates_out_of_the_cycle() {
    let mut rig = make_rig();
    rig.hw.fail_adc = true;

    let err = rig
        .app
        .run_cycle(&mut rig.hw, &mut rig.display, &mut rig.clock, &mut rig.sink);
    assert_eq!(
        err,
        Err(Error::Peripheral(PeripheralFault::AdcReadFailed))
    );
    // No actuator was commanded on the failed cycle.
    assert!(rig.hw.calls.is_empty());
}

#[test]
fn out_of_range_sample_is_a_fault_not_a_reading() {
    let mut rig = make_rig();
    rig.hw.humidity_raw = 4096; // one past the 12-bit domain

    let err = rig
        .app
        .run_cycle(&mut rig.hw, &mut rig.display, &mut rig.clock, &mut rig.sink);
    assert_eq!(
        err,
        Err(Error::Peripheral(PeripheralFault::AdcOutOfRange))
    );
}
