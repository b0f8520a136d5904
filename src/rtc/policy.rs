use crate::rtc::ClockReading;

/// Clocks reporting an earlier year have reset to a manufacturing default.
pub const MIN_TRUSTED_YEAR: i32 = 2024;

/// A clock may run this many years ahead of the reference before it is rewritten.
pub const FUTURE_TOLERANCE_YEARS: i32 = 1;

/// Whether the clock must be overwritten from a reference wall clock.
///
/// The window is asymmetric: a clock slightly ahead of the reference (set from
/// another timezone, say) is left alone, while one stuck in the past or far in
/// the future is rewritten.
pub fn time_needs_setting(reading: Option<&ClockReading>, reference_year: i32) -> bool {
    let Some(reading) = reading else {
        return true;
    };

    let year = reading.year as i32;
    year < MIN_TRUSTED_YEAR || year > reference_year + FUTURE_TOLERANCE_YEARS
}
