//! Integration tests for the operator disable/enable override.
//!
//! Button A (disable) and button B (enable) are exercised through
//! scripted raw samples; the double-sample debounce, the settle pauses,
//! and the disabled actuator representation are all observable through
//! the recording mocks.

use crate::mock_hw::{ActuatorCall, MockClock, MockDisplay, MockHardware, RecordingSink};

use enviromon::app::events::AppEvent;
use enviromon::app::service::AppService;
use enviromon::classify::SystemState;
use enviromon::config::SystemConfig;

struct Rig {
    app: AppService,
    hw: MockHardware,
    display: MockDisplay,
    clock: MockClock,
    sink: RecordingSink,
}

fn make_rig() -> Rig {
    let mut app = AppService::new(SystemConfig::default());
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

    fn disable(&mut self) {
        self.hw.press_disable(&[true, true]);
        self.cycle();
        assert!(!self.app.is_enabled());
    }

    fn disabled_banner(&self) -> Vec<(String, u8, u8)> {
        vec![
            ("System".to_owned(), 0, 0),
            ("disabled".to_owned(), 0, 10),
        ]
    }
}

// ── Disable transition ────────────────────────────────────────

#[test]
fn confirmed_disable_forces_the_disabled_representation() {
    let mut rig = make_rig();
    rig.hw.press_disable(&[true, true]);
    rig.cycle();

    assert!(!rig.app.is_enabled());
    assert_eq!(rig.app.state(), None);
    assert_eq!(rig.hw.led_state(), Some((false, false, false)));
    assert_eq!(rig.hw.buzzer_level(), Some(0));
    assert_eq!(rig.display.frame_lines(), rig.disabled_banner());
    // Debounce corroboration, then the post-disable settle.
    assert_eq!(rig.clock.delays, vec![50, 500]);
    assert!(rig
        .sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::SystemDisabled)));
}

#[test]
fn transient_disable_press_is_rejected() {
    let mut rig = make_rig();
    rig.hw.press_disable(&[true, false]);
    rig.cycle();

    // One uncorroborated sample changes nothing: the cycle proceeds
    // with normal classification.
    assert!(rig.app.is_enabled());
    assert_eq!(rig.app.state(), Some(SystemState::Normal));
    assert_eq!(rig.hw.led_state(), Some((false, true, false)));
    assert_eq!(rig.clock.delays, vec![50, 200]);
}

#[test]
fn disable_check_runs_before_the_sensors_are_touched() {
    let mut rig = make_rig();
    rig.hw.fail_adc = true;
    rig.hw.press_disable(&[true, true]);

    // The disable branch returns before read_all, so the broken ADC is
    // never reached.
    rig.cycle();
    assert!(!rig.app.is_enabled());
}

// ── While disabled ────────────────────────────────────────────

#[test]
fn disabled_system_reasserts_the_representation_every_cycle() {
    let mut rig = make_rig();
    rig.disable();

    let flushes_before = rig.display.flush_count();
    rig.cycle();
    rig.cycle();

    assert_eq!(rig.display.flush_count(), flushes_before + 2);
    assert_eq!(rig.display.frame_lines(), rig.disabled_banner());
    // Sensor values are irrelevant while gated off: the LED command is
    // still all-dark.
    assert_eq!(rig.hw.led_state(), Some((false, false, false)));
    // Each disabled cycle paces at the normal loop period.
    assert_eq!(rig.clock.delays[rig.clock.delays.len() - 2..], [200, 200]);
}

#[test]
fn disable_reconfirmation_while_disabled_reenters_the_branch() {
    let mut rig = make_rig();
    rig.disable();

    rig.hw.press_disable(&[true, true]);
    rig.cycle();

    assert!(!rig.app.is_enabled());
    // The settle pause runs again on re-confirmation.
    assert_eq!(rig.clock.delays.last(), Some(&500));
    let disabled_events = rig
        .sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::SystemDisabled))
        .count();
    assert_eq!(disabled_events, 2);
}

// ── Enable transition ─────────────────────────────────────────

#[test]
fn enable_flips_the_flag_but_classification_waits_one_cycle() {
    let mut rig = make_rig();
    rig.disable();

    rig.hw.press_enable(&[true, true]);
    rig.cycle();

    // Flag restored, event emitted...
    assert!(rig.app.is_enabled());
    assert!(rig
        .sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::SystemEnabled)));
    // ...but this cycle still shows the disabled frame.
    assert_eq!(rig.display.frame_lines(), rig.disabled_banner());
    // Debounce, 300 ms settle, then the loop period.
    let n = rig.clock.delays.len();
    assert_eq!(rig.clock.delays[n - 3..], [50, 300, 200]);

    // The very next cycle resumes normal classification.
    rig.cycle();
    assert_eq!(rig.app.state(), Some(SystemState::Normal));
    assert_eq!(rig.hw.led_state(), Some((false, true, false)));
    assert_eq!(rig.display.frame_lines()[0].0, "State: Normal");
}

#[test]
fn transient_enable_press_keeps_the_system_disabled() {
    let mut rig = make_rig();
    rig.disable();

    rig.hw.press_enable(&[true, false]);
    rig.cycle();

    assert!(!rig.app.is_enabled());
    assert_eq!(rig.display.frame_lines(), rig.disabled_banner());
    assert!(!rig
        .sink
        .events
        .iter()
        .any(|e| matches!(e, AppEvent::SystemEnabled)));
}

#[test]
fn full_disable_enable_round_trip() {
    let mut rig = make_rig();

    // Run normally first.
    rig.cycle();
    assert_eq!(rig.app.state(), Some(SystemState::Normal));

    // Disable, idle one cycle, re-enable, resume.
    rig.disable();
    rig.cycle();
    rig.hw.press_enable(&[true, true]);
    rig.cycle();
    rig.cycle();

    assert!(rig.app.is_enabled());
    assert_eq!(rig.app.state(), Some(SystemState::Normal));

    // The actuator history never skipped the disabled representation:
    // there was at least one all-dark LED command in between.
    assert!(rig
        .hw
        .calls
        .iter()
        .any(|c| *c
            == ActuatorCall::SetLed {
                r: false,
                g: false,
                b: false
            }));
}
