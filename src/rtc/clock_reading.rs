use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::rtc::{calculate_weekday, is_valid_time};

/// The RTC stores a two-digit year on top of this base.
pub const CENTURY_BASE: u16 = 2000;
pub const MAX_YEAR: u16 = CENTURY_BASE + 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    #[error("year out of range: expected 2000-2099, got {0}")]
    YearOutOfRange(i32),

    #[error("invalid date/time: {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")]
    InvalidDateTime {
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    },

    #[error("weekday out of range: expected 1-7, got {0}")]
    InvalidWeekday(u8),
}

/// A wall-clock time as held by the battery-backed RTC.
///
/// `weekday` uses ISO numbering, 1 = Monday through 7 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub year: u16,

    pub month: u8,

    pub day: u8,

    pub hour: u8,

    pub minute: u8,

    pub second: u8,

    pub weekday: u8,
}

impl ClockReading {
    /// Builds a validated reading and derives its weekday from the date.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, ClockError> {
        let weekday = calculate_weekday(year as i32, month as u32, day as u32);
        Self::with_weekday(year, month, day, hour, minute, second, weekday)
    }

    /// Builds a validated reading keeping the weekday the clock reported.
    pub fn with_weekday(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        weekday: u8,
    ) -> Result<Self, ClockError> {
        if !(CENTURY_BASE..=MAX_YEAR).contains(&year) {
            return Err(ClockError::YearOutOfRange(year as i32));
        }

        if !is_valid_time(
            year as i32,
            month as u32,
            day as u32,
            hour as u32,
            minute as u32,
            second as u32,
        ) {
            return Err(ClockError::InvalidDateTime {
                year,
                month,
                day,
                hour,
                minute,
                second,
            });
        }

        if !(1..=7).contains(&weekday) {
            return Err(ClockError::InvalidWeekday(weekday));
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            weekday,
        })
    }

    pub fn from_naive(date_time: &NaiveDateTime) -> Result<Self, ClockError> {
        let year = date_time.year();
        let year = u16::try_from(year).map_err(|_| ClockError::YearOutOfRange(year))?;

        Self::new(
            year,
            date_time.month() as u8,
            date_time.day() as u8,
            date_time.hour() as u8,
            date_time.minute() as u8,
            date_time.second() as u8,
        )
    }

    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year as i32, self.month as u32, self.day as u32)?.and_hms_opt(
            self.hour as u32,
            self.minute as u32,
            self.second as u32,
        )
    }
}
