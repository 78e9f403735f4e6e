//! Humidity channel — linear scaling from the 12-bit raw domain to
//! 0–80 % relative humidity.

use super::ADC_MAX_COUNT;
use crate::app::ports::{AnalogChannel, SensorPort};
use crate::error::PeripheralFault;

/// Engineering-unit ceiling: raw full scale maps to 80 %.
pub const HUMIDITY_MAX_PCT: u8 = 80;

pub struct HumiditySensor;

impl HumiditySensor {
    pub fn new() -> Self {
        Self
    }

    /// Sample the channel and convert to percent.
    pub fn read(&self, adc: &mut impl SensorPort) -> Result<u8, PeripheralFault> {
        let raw = adc.read_raw(AnalogChannel::Humidity)?;
        if raw > ADC_MAX_COUNT {
            return Err(PeripheralFault::AdcOutOfRange);
        }
        Ok(scale_raw(raw))
    }
}

/// Floor-division linear scaling; raw 0 → 0 %, raw 4095 → 80 %.
pub fn scale_raw(raw: u16) -> u8 {
    ((u32::from(raw) * u32::from(HUMIDITY_MAX_PCT)) / u32::from(ADC_MAX_COUNT)) as u8
}
