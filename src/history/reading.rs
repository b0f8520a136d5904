use crate::rtc::ClockReading;
use crate::sensor::{AirQuality, calculate_heat_index};

/// One logged sample. Only [`ReadingLog::add_reading`](crate::history::ReadingLog::add_reading)
/// creates these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub timestamp: ClockReading,

    pub temperature: f64,

    /// Always within 0-100 %.
    pub humidity: f64,

    pub pressure: f64,

    pub air_quality: i32,
}

impl Reading {
    pub fn air_quality_category(&self) -> AirQuality {
        AirQuality::from_score(self.air_quality)
    }

    pub fn heat_index(&self) -> f64 {
        calculate_heat_index(self.temperature, self.humidity)
    }
}
