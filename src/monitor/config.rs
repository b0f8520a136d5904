use crate::display::{DISPLAY_WIDTH, TemperatureUnit};

/// One day of readings at one sample per minute.
pub const DEFAULT_LOG_CAPACITY: usize = 24 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct MonitorConfig {
    /// Maximum readings kept in memory. `None` keeps every reading.
    pub log_capacity: Option<usize>,

    /// Added to every converted temperature, in °C.
    pub temperature_offset: f64,

    pub temperature_unit: TemperatureUnit,

    /// Status lines are cut to this many characters.
    pub line_width: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            log_capacity: Some(DEFAULT_LOG_CAPACITY),
            temperature_offset: 0.0,
            temperature_unit: TemperatureUnit::Celsius,
            line_width: DISPLAY_WIDTH,
        }
    }
}
