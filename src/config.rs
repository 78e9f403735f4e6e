//! System configuration parameters
//!
//! All tunable parameters for the EnviroMon controller: classification
//! thresholds, override debounce timings, and loop pacing.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Classification thresholds ---
    /// Temperature strictly above this is Critical (°C).
    pub critical_temperature_c: u8,
    /// Humidity strictly below this is Critical (%).
    pub critical_humidity_pct: u8,
    /// Lower bound of the inclusive Alert temperature band (°C).
    pub alert_temperature_low_c: u8,
    /// Upper bound of the inclusive Alert temperature band (°C).
    pub alert_temperature_high_c: u8,
    /// Lower bound of the inclusive Alert humidity band (%).
    pub alert_humidity_low_pct: u8,
    /// Upper bound of the inclusive Alert humidity band (%).
    pub alert_humidity_high_pct: u8,

    // --- Buzzer ---
    /// LEDC duty driven while the alarm sounds (0–4095; 2048 ≈ 50 %).
    pub buzzer_on_duty: u16,

    // --- Override debounce ---
    /// Gap between the two corroborating button samples (ms).
    pub debounce_ms: u32,
    /// Pause after a confirmed disable before polling resumes (ms).
    pub disable_settle_ms: u32,
    /// Pause after a confirmed re-enable before the flag flips (ms).
    pub enable_settle_ms: u32,

    // --- Timing ---
    /// Control loop period (ms).
    pub loop_period_ms: u32,
    /// Emit a telemetry event every N enabled cycles.
    pub telemetry_every_cycles: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Thresholds
            critical_temperature_c: 34,
            critical_humidity_pct: 30,
            alert_temperature_low_c: 30,
            alert_temperature_high_c: 33,
            alert_humidity_low_pct: 30,
            alert_humidity_high_pct: 50,

            // Buzzer
            buzzer_on_duty: 2048,

            // Override debounce
            debounce_ms: 50,
            disable_settle_ms: 500,
            enable_settle_ms: 300,

            // Timing
            loop_period_ms: 200,        // 5 Hz
            telemetry_every_cycles: 50, // every ~10 s
        }
    }
}
