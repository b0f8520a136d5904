use crate::sensor::{convert_humidity, convert_pressure, convert_temperature};

/// Raw counts as delivered by the BME688 driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSensorFrame {
    /// Milli-degrees Celsius.
    pub temperature: i32,

    /// Hundredths of a pascal.
    pub pressure: i32,

    /// Milli-percent relative humidity.
    pub humidity: i32,

    /// IAQ score, already computed by the driver.
    pub air_quality: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedFrame {
    pub temperature_celsius: f64,

    pub humidity_percent: f64,

    pub pressure_pa: f64,

    pub air_quality: i32,
}

impl RawSensorFrame {
    pub fn convert(&self, calibration_offset: f64) -> ConvertedFrame {
        ConvertedFrame {
            temperature_celsius: convert_temperature(self.temperature, calibration_offset),
            humidity_percent: convert_humidity(self.humidity),
            pressure_pa: convert_pressure(self.pressure),
            air_quality: self.air_quality,
        }
    }
}
