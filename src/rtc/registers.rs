//! MCP7940-N timekeeping registers.
//!
//! The chip keeps seven consecutive BCD registers starting at address 0x00:
//! seconds, minutes, hours, weekday, day, month and a two-digit year. Several
//! of them share their top bits with control flags that must be masked off
//! before decoding.

use crate::rtc::{BcdError, CENTURY_BASE, ClockError, ClockReading, bcd_to_int, int_to_bcd};

pub const CLOCK_REGISTER_COUNT: usize = 7;

/// Bit 7 of the seconds register starts the oscillator.
pub const OSCILLATOR_START: u8 = 0x80;

/// Bit 3 of the weekday register enables the battery backup supply.
pub const BATTERY_BACKUP_ENABLE: u8 = 0x08;

const SECONDS_MASK: u8 = 0x7f;
const MINUTES_MASK: u8 = 0x7f;
// 12/24 hour select lives in bit 6.
const HOURS_MASK: u8 = 0x3f;
const WEEKDAY_MASK: u8 = 0x07;
const DAY_MASK: u8 = 0x3f;
// Leap-year flag lives in bit 5.
const MONTH_MASK: u8 = 0x1f;

const SECONDS_INDEX: usize = 0;
const MINUTES_INDEX: usize = 1;
const HOURS_INDEX: usize = 2;
const WEEKDAY_INDEX: usize = 3;
const DAY_INDEX: usize = 4;
const MONTH_INDEX: usize = 5;
const YEAR_INDEX: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockRegisters(pub [u8; CLOCK_REGISTER_COUNT]);

impl ClockRegisters {
    /// Encodes a reading in the layout written back to the chip, with the
    /// oscillator running and battery backup enabled.
    pub fn encode(reading: &ClockReading) -> Result<Self, BcdError> {
        let year = reading.year as i32 - CENTURY_BASE as i32;

        let mut registers = [0u8; CLOCK_REGISTER_COUNT];
        registers[SECONDS_INDEX] = int_to_bcd(reading.second as i32)? | OSCILLATOR_START;
        registers[MINUTES_INDEX] = int_to_bcd(reading.minute as i32)?;
        registers[HOURS_INDEX] = int_to_bcd(reading.hour as i32)?;
        registers[WEEKDAY_INDEX] = int_to_bcd(reading.weekday as i32)? | BATTERY_BACKUP_ENABLE;
        registers[DAY_INDEX] = int_to_bcd(reading.day as i32)?;
        registers[MONTH_INDEX] = int_to_bcd(reading.month as i32)?;
        registers[YEAR_INDEX] = int_to_bcd(year)?;

        Ok(Self(registers))
    }

    pub fn decode(&self) -> Result<ClockReading, ClockError> {
        let r = &self.0;

        ClockReading::with_weekday(
            CENTURY_BASE + bcd_to_int(r[YEAR_INDEX]) as u16,
            bcd_to_int(r[MONTH_INDEX] & MONTH_MASK),
            bcd_to_int(r[DAY_INDEX] & DAY_MASK),
            bcd_to_int(r[HOURS_INDEX] & HOURS_MASK),
            bcd_to_int(r[MINUTES_INDEX] & MINUTES_MASK),
            bcd_to_int(r[SECONDS_INDEX] & SECONDS_MASK),
            bcd_to_int(r[WEEKDAY_INDEX] & WEEKDAY_MASK),
        )
    }

    pub fn is_oscillator_running(&self) -> bool {
        self.0[SECONDS_INDEX] & OSCILLATOR_START != 0
    }

    pub fn is_battery_backup_enabled(&self) -> bool {
        self.0[WEEKDAY_INDEX] & BATTERY_BACKUP_ENABLE != 0
    }
}
