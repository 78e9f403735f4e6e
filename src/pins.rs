//! GPIO / peripheral pin assignments for the EnviroMon main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// RGB status LED (discrete, one GPIO output per colour channel)
// ---------------------------------------------------------------------------

pub const LED_R_GPIO: i32 = 11;
pub const LED_G_GPIO: i32 = 12;
/// Wired and initialised but reserved — never driven by the classifier.
pub const LED_B_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// Buzzer (LEDC PWM)
// ---------------------------------------------------------------------------

/// LEDC PWM output for the piezo buzzer.
pub const BUZZER_PWM_GPIO: i32 = 1;
/// Buzzer carrier frequency. Fixed at init; not runtime-adjustable.
pub const BUZZER_PWM_FREQ_HZ: u32 = 100;
/// LEDC timer resolution for the buzzer (12-bit, 0–4095 duty levels).
pub const BUZZER_PWM_RESOLUTION_BITS: u32 = 12;
/// Full-scale buzzer duty at 12-bit resolution.
pub const BUZZER_DUTY_MAX: u16 = 4095;

// ---------------------------------------------------------------------------
// Operator buttons (active-low momentary switches, pull-ups enabled)
// ---------------------------------------------------------------------------

/// Button A — requests a system disable.
pub const BUTTON_DISABLE_GPIO: i32 = 16;
/// Button B — requests a system re-enable.
pub const BUTTON_ENABLE_GPIO: i32 = 17;

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1 oneshot)
// ---------------------------------------------------------------------------

/// Humidity input — ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const HUMIDITY_ADC_CHANNEL: u32 = 4;
/// Temperature input — ADC1 channel 8 (GPIO 9 on ESP32-S3).
pub const TEMPERATURE_ADC_CHANNEL: u32 = 8;

// ---------------------------------------------------------------------------
// I²C bus — SSD1306 status display
// ---------------------------------------------------------------------------

/// Typed pin handles for the bus are taken in `main`; the numbers here
/// document the board routing.
pub const I2C_SDA_GPIO: i32 = 14;
pub const I2C_SCL_GPIO: i32 = 15;
pub const I2C_FREQ_HZ: u32 = 400_000;
pub const SSD1306_ADDR: u8 = 0x3C;
