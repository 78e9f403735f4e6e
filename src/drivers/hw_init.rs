//! One-shot hardware peripheral initialization.
//!
//! Configures the ADC oneshot unit, GPIO directions, and the buzzer LEDC
//! timer using raw ESP-IDF sys calls. Called once from `main()` before
//! the poll loop starts.
//!
//! On non-espidf targets every helper is a simulation stub backed by
//! atomics, so the library and its tests build on the host.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

use crate::error::PeripheralFault;
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    AdcInitFailed(i32),
    GpioConfigFailed(i32),
    LedcInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AdcInitFailed(rc) => write!(f, "ADC1 init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::LedcInitFailed(rc) => write!(f, "LEDC timer/channel config failed (rc={})", rc),
        }
    }
}

impl std::error::Error for HwInitError {}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: called once from main() before the poll loop; single-threaded.
    unsafe {
        init_adc()?;
        init_buttons()?;
        init_led_outputs()?;
        init_buzzer_pwm()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// main-loop ADC read path. `init_adc()` completes before the poll loop
/// starts, so no concurrent access is possible.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::AdcInitFailed(ret));
    }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };

    for channel in [pins::HUMIDITY_ADC_CHANNEL, pins::TEMPERATURE_ADC_CHANNEL] {
        let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), channel, &chan_cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::AdcInitFailed(ret));
        }
    }

    info!("hw_init: ADC1 configured (CH4=humidity, CH8=temperature)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> Result<u16, PeripheralFault> {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract — single-threaded main-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        return Err(PeripheralFault::AdcReadFailed);
    }
    Ok(raw.max(0) as u16)
}

// ── GPIO Inputs (buttons) ─────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_buttons() -> Result<(), HwInitError> {
    // Active-low momentary switches; internal pull-ups keep the line
    // high while released. Polled, not interrupt-driven.
    for pin in [pins::BUTTON_DISABLE_GPIO, pins::BUTTON_ENABLE_GPIO] {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
    }

    info!("hw_init: buttons configured (polled, active-low)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> Result<bool, PeripheralFault> {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin; safe to call from main context.
    Ok((unsafe { gpio_get_level(pin) }) != 0)
}

// ── GPIO Outputs (RGB LED) ────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_led_outputs() -> Result<(), HwInitError> {
    for pin in [pins::LED_R_GPIO, pins::LED_G_GPIO, pins::LED_B_GPIO] {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            return Err(HwInitError::GpioConfigFailed(ret));
        }
        unsafe { gpio_set_level(pin, 0) };
    }

    info!("hw_init: LED outputs configured");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) -> Result<(), PeripheralFault> {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_led_outputs(). Main-loop only.
    let ret = unsafe { gpio_set_level(pin, u32::from(high)) };
    if ret != ESP_OK as i32 {
        return Err(PeripheralFault::GpioWriteFailed);
    }
    Ok(())
}

// ── LEDC PWM (buzzer) ─────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_buzzer_pwm() -> Result<(), HwInitError> {
    // Timer 0: buzzer carrier (100 Hz, 12-bit — duty 0–4095).
    // SAFETY: called from the single main-task context via init_peripherals().
    let timer0 = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: ledc_timer_t_LEDC_TIMER_0,
        duty_resolution: ledc_timer_bit_t_LEDC_TIMER_12_BIT,
        freq_hz: pins::BUZZER_PWM_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    let ret = unsafe { ledc_timer_config(&timer0) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::LedcInitFailed(ret));
    }

    let ret = unsafe {
        ledc_channel_config(&ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel: LEDC_CH_BUZZER,
            timer_sel: ledc_timer_t_LEDC_TIMER_0,
            gpio_num: pins::BUZZER_PWM_GPIO,
            duty: 0,
            hpoint: 0,
            ..Default::default()
        })
    };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::LedcInitFailed(ret));
    }

    info!(
        "hw_init: buzzer LEDC configured ({} Hz carrier)",
        pins::BUZZER_PWM_FREQ_HZ
    );
    Ok(())
}

pub const LEDC_CH_BUZZER: u32 = 0;

#[cfg(target_os = "espidf")]
pub fn ledc_set_buzzer(duty: u16) -> Result<(), PeripheralFault> {
    // SAFETY: the channel was configured in init_buzzer_pwm(); duty
    // register writes are race-free since only the main loop calls this.
    unsafe {
        let ret = ledc_set_duty(
            ledc_mode_t_LEDC_LOW_SPEED_MODE,
            LEDC_CH_BUZZER,
            u32::from(duty),
        );
        if ret != ESP_OK as i32 {
            return Err(PeripheralFault::PwmWriteFailed);
        }
        let ret = ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, LEDC_CH_BUZZER);
        if ret != ESP_OK as i32 {
            return Err(PeripheralFault::PwmWriteFailed);
        }
    }
    Ok(())
}

// ── Host simulation ───────────────────────────────────────────
//
// The host paths mirror the real helpers and read from atomics that
// tests (or a simulated board harness) can drive.

#[cfg(not(target_os = "espidf"))]
mod sim {
    use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

    pub static ADC_HUMIDITY: AtomicU16 = AtomicU16::new(0);
    pub static ADC_TEMPERATURE: AtomicU16 = AtomicU16::new(0);
    pub static BUTTON_DISABLE_PRESSED: AtomicBool = AtomicBool::new(false);
    pub static BUTTON_ENABLE_PRESSED: AtomicBool = AtomicBool::new(false);

    pub fn load_u16(cell: &AtomicU16) -> u16 {
        cell.load(Ordering::Relaxed)
    }

    pub fn load_bool(cell: &AtomicBool) -> bool {
        cell.load(Ordering::Relaxed)
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn adc1_read(channel: u32) -> Result<u16, PeripheralFault> {
    let raw = match channel {
        c if c == pins::HUMIDITY_ADC_CHANNEL => sim::load_u16(&sim::ADC_HUMIDITY),
        c if c == pins::TEMPERATURE_ADC_CHANNEL => sim::load_u16(&sim::ADC_TEMPERATURE),
        _ => 0,
    };
    Ok(raw)
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_read(pin: i32) -> Result<bool, PeripheralFault> {
    // Buttons idle high (pull-up); a simulated press pulls the line low.
    let level = match pin {
        p if p == pins::BUTTON_DISABLE_GPIO => !sim::load_bool(&sim::BUTTON_DISABLE_PRESSED),
        p if p == pins::BUTTON_ENABLE_GPIO => !sim::load_bool(&sim::BUTTON_ENABLE_PRESSED),
        _ => true,
    };
    Ok(level)
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) -> Result<(), PeripheralFault> {
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn ledc_set_buzzer(_duty: u16) -> Result<(), PeripheralFault> {
    Ok(())
}

/// Inject a raw ADC sample for one channel (sim only).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_adc_raw(channel: u32, raw: u16) {
    use core::sync::atomic::Ordering;
    match channel {
        c if c == pins::HUMIDITY_ADC_CHANNEL => sim::ADC_HUMIDITY.store(raw, Ordering::Relaxed),
        c if c == pins::TEMPERATURE_ADC_CHANNEL => {
            sim::ADC_TEMPERATURE.store(raw, Ordering::Relaxed);
        }
        _ => {}
    }
}

/// Press or release a simulated button (sim only).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_button_pressed(pin: i32, pressed: bool) {
    use core::sync::atomic::Ordering;
    match pin {
        p if p == pins::BUTTON_DISABLE_GPIO => {
            sim::BUTTON_DISABLE_PRESSED.store(pressed, Ordering::Relaxed);
        }
        p if p == pins::BUTTON_ENABLE_GPIO => {
            sim::BUTTON_ENABLE_PRESSED.store(pressed, Ordering::Relaxed);
        }
        _ => {}
    }
}
