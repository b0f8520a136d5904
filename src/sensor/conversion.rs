//! Raw-count to physical-unit conversion.
//!
//! These are linear approximations, not the BME688 vendor compensation.

/// Heat index is only meaningful at or above this air temperature.
pub const HEAT_INDEX_THRESHOLD_CELSIUS: f64 = 27.0;

pub const HUMIDITY_MIN_PERCENT: f64 = 0.0;
pub const HUMIDITY_MAX_PERCENT: f64 = 100.0;

/// Rounds to one decimal place from the exact binary value, ties to even.
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Milli-degrees Celsius plus an offset, rounded to 0.1 °C. Not clamped.
pub fn convert_temperature(raw: i32, calibration_offset: f64) -> f64 {
    round_to_tenth(raw as f64 / 1000.0 + calibration_offset)
}

/// Hundredths of a pascal to pascals.
pub fn convert_pressure(raw: i32) -> f64 {
    raw as f64 / 100.0
}

/// Milli-percent relative humidity, clamped to 0-100 %.
pub fn convert_humidity(raw: i32) -> f64 {
    (raw as f64 / 1000.0).clamp(HUMIDITY_MIN_PERCENT, HUMIDITY_MAX_PERCENT)
}

/// Feels-like temperature using the simplified Rothfusz approximation.
pub fn calculate_heat_index(temp_celsius: f64, humidity_percent: f64) -> f64 {
    if temp_celsius < HEAT_INDEX_THRESHOLD_CELSIUS {
        return temp_celsius;
    }

    let f = celsius_to_fahrenheit(temp_celsius);
    let heat_index = 0.5 * (f + 61.0 + (f - 68.0) * 1.2 + humidity_percent * 0.094);

    round_to_tenth(fahrenheit_to_celsius(heat_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_temperature() {
        assert_eq!(convert_temperature(25000, 0.0), 25.0);
        assert_eq!(convert_temperature(30500, 0.0), 30.5);
        assert_eq!(convert_temperature(25000, -1.5), 23.5);
        assert_eq!(convert_temperature(-5000, 0.0), -5.0);
        assert_eq!(convert_temperature(100000, 0.0), 100.0);
        assert_eq!(convert_temperature(21349, 0.0), 21.3);
    }

    #[test]
    fn test_round_to_tenth_ties_go_to_even() {
        assert_eq!(convert_temperature(21250, 0.0), 21.2);
        assert_eq!(convert_temperature(150, 0.0), 0.1);
        assert_eq!(round_to_tenth(-4.25), -4.2);
    }

    #[test]
    fn test_convert_pressure() {
        assert_eq!(convert_pressure(10132500), 101325.0);
        assert_eq!(convert_pressure(100000), 1000.0);
        assert_eq!(convert_pressure(101), 1.01);
    }

    #[test]
    fn test_convert_humidity_clamps() {
        assert_eq!(convert_humidity(45000), 45.0);
        assert_eq!(convert_humidity(-5000), 0.0);
        assert_eq!(convert_humidity(-10000), 0.0);
        assert_eq!(convert_humidity(105000), 100.0);
        assert_eq!(convert_humidity(150000), 100.0);
    }

    #[test]
    fn test_heat_index_below_threshold_passes_through() {
        assert_eq!(calculate_heat_index(20.0, 50.0), 20.0);
        assert_eq!(calculate_heat_index(26.9, 100.0), 26.9);
    }

    #[test]
    fn test_heat_index_above_threshold_feels_hotter() {
        let heat_index = calculate_heat_index(35.0, 80.0);
        assert!(heat_index > 35.0);
        assert_eq!(heat_index, 36.6);
    }

    #[test]
    fn test_heat_index_does_not_fall_with_humidity() {
        for temp in [27.0, 30.0, 35.0, 42.5] {
            let mut previous = f64::MIN;
            for humidity in 0..=100 {
                let heat_index = calculate_heat_index(temp, humidity as f64);
                assert!(
                    heat_index >= previous,
                    "heat index fell at {temp} °C, {humidity} %"
                );
                previous = heat_index;
            }
        }
    }
}
