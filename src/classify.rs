//! Severity classification.
//!
//! One pure function maps a sensor reading onto the three-level severity
//! scale. Rules are evaluated in order and the first match wins: the
//! threshold bands overlap (a reading can sit in the "normal" humidity
//! range while the temperature is in the Alert band), and the rule order
//! is the documented tie-breaker, not an accident of implementation.

use crate::config::SystemConfig;
use crate::sensors::SensorReading;

/// Discrete severity of the monitored environment.
///
/// Derived fresh every cycle; never persisted. Carries its own display
/// label and actuator representation so the synchroniser cannot drift
/// out of step with the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemState {
    Normal,
    Alert,
    Critical,
}

impl SystemState {
    /// Label rendered on the status display.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Alert => "Alert",
            Self::Critical => "Critical",
        }
    }

    /// Discrete (red, green, blue) LED channels for this severity.
    /// Red + green mixes to amber. Blue is reserved and never driven.
    pub const fn led_channels(self) -> (bool, bool, bool) {
        match self {
            Self::Normal => (false, true, false),
            Self::Alert => (true, true, false),
            Self::Critical => (true, false, false),
        }
    }

    /// Whether the audible alarm sounds in this severity.
    pub const fn alarm_on(self) -> bool {
        matches!(self, Self::Critical)
    }
}

/// Classify a reading against the configured thresholds.
///
/// Evaluation order, first match wins:
/// 1. Critical — temperature above the critical limit OR humidity below
///    the critical floor.
/// 2. Alert — temperature or humidity inside its Alert band.
/// 3. Normal — everything else. This is an exhaustive fallback: readings
///    that fall between the Alert and Critical bands (e.g. humidity 60 %
///    with temperature 34 °C) land here.
pub fn classify(reading: SensorReading, config: &SystemConfig) -> SystemState {
    let SensorReading {
        humidity_pct: hum,
        temperature_c: temp,
    } = reading;

    if temp > config.critical_temperature_c || hum < config.critical_humidity_pct {
        return SystemState::Critical;
    }

    let temp_alert =
        (config.alert_temperature_low_c..=config.alert_temperature_high_c).contains(&temp);
    let hum_alert =
        (config.alert_humidity_low_pct..=config.alert_humidity_high_pct).contains(&hum);
    if temp_alert || hum_alert {
        return SystemState::Alert;
    }

    SystemState::Normal
}
