//! Fixed-width text for the 16-column OLED status display.

use crate::display::TemperatureUnit;
use crate::rtc::ClockReading;
use crate::sensor::celsius_to_fahrenheit;

/// Characters per display line.
pub const DISPLAY_WIDTH: usize = 16;

const ELLIPSIS: &str = "...";

pub fn format_time_display(hour: u8, minute: u8) -> String {
    format!("{hour:02}:{minute:02}")
}

pub fn format_date_display(day: u8, month: u8, year: Option<u16>) -> String {
    match year {
        Some(year) => format!("{day:02}/{month:02}/{year}"),
        None => format!("{day:02}/{month:02}"),
    }
}

/// `DD/MM/YYYY HH:MM`, exactly one display line wide.
pub fn format_clock_line(reading: &ClockReading) -> String {
    format!(
        "{} {}",
        format_date_display(reading.day, reading.month, Some(reading.year)),
        format_time_display(reading.hour, reading.minute)
    )
}

pub fn format_temperature(celsius: f64, unit: TemperatureUnit) -> String {
    let value = match unit {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
    };
    format!("{value:.1}{}", unit.symbol())
}

/// Kilopascals above 1000 Pa, whole pascals otherwise.
pub fn format_pressure(pa: f64) -> String {
    if pa > 1000.0 {
        format!("{:.1}kPa", pa / 1000.0)
    } else {
        format!("{pa:.0}Pa")
    }
}

/// Shortens `text` to `max_length` characters, ending in `...` when cut.
///
/// Widths too small for the ellipsis cut the text without one.
pub fn truncate_for_display(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    if max_length < ELLIPSIS.len() {
        return text.chars().take(max_length).collect();
    }

    let mut truncated: String = text.chars().take(max_length - ELLIPSIS.len()).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
