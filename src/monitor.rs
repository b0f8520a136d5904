//! Read → log → display cycle on top of a [`Board`].
//!
//! The monitor runs three independent phases:
//!
//! - **ClockSync** ([`Monitor::sync_clock`]) rewrites the RTC from a reference
//!   wall clock when the stored time cannot be trusted.
//! - **Sample** ([`Monitor::sample`]) converts one raw sensor frame and logs it
//!   with the RTC time.
//! - **Render** ([`Monitor::render`]) writes the latest reading to the display.
//!
//! Board failures never escape a phase. They are logged and reported as
//! `false` or `None`, leaving the clock and the reading log untouched.

mod config;

pub use config::*;

use chrono::{Datelike, NaiveDateTime};
use log::{debug, info, warn};

use crate::display::{format_pressure, format_temperature, truncate_for_display};
use crate::hardware::Board;
use crate::history::{Reading, ReadingLog};
use crate::rtc::{ClockReading, time_needs_setting};

pub const NO_DATA_LINE: &str = "No data";

pub const STATUS_LINE_COUNT: usize = 4;

#[derive(Debug)]
pub struct Monitor<B: Board> {
    board: B,
    log: ReadingLog,
    config: MonitorConfig,
}

impl<B: Board> Monitor<B> {
    pub fn new(board: B) -> Self {
        Self::with_config(board, MonitorConfig::default())
    }

    pub fn with_config(board: B, config: MonitorConfig) -> Self {
        let log = match config.log_capacity {
            Some(capacity) => ReadingLog::with_capacity(capacity),
            None => ReadingLog::new(),
        };

        Self { board, log, config }
    }

    /// Rewrites the RTC from `reference` when the stored time is missing or
    /// implausible. Returns whether the clock was written.
    pub fn sync_clock(&mut self, reference: &NaiveDateTime) -> bool {
        let current = match self.board.read_clock() {
            Ok(current) => current,
            Err(err) => {
                warn!("clock sync skipped, failed to read RTC: {err}");
                return false;
            }
        };

        if !time_needs_setting(current.as_ref(), reference.year()) {
            debug!("RTC time {current:?} is trusted, leaving it unchanged");
            return false;
        }

        let reading = match ClockReading::from_naive(reference) {
            Ok(reading) => reading,
            Err(err) => {
                warn!("clock sync skipped, reference time {reference} is unusable: {err}");
                return false;
            }
        };

        if let Err(err) = self.board.write_clock(&reading) {
            warn!("clock sync failed, could not write RTC: {err}");
            return false;
        }

        info!("RTC set to {reference} (was {current:?})");
        true
    }

    /// Takes one sensor reading and appends it to the log.
    pub fn sample(&mut self) -> Option<Reading> {
        let frame = match self.board.read_raw_sensor() {
            Ok(frame) => frame,
            Err(err) => {
                warn!("sample skipped, failed to read sensor: {err}");
                return None;
            }
        };

        let timestamp = match self.board.read_clock() {
            Ok(Some(timestamp)) => timestamp,
            Ok(None) => {
                warn!("sample skipped, RTC holds no valid time");
                return None;
            }
            Err(err) => {
                warn!("sample skipped, failed to read RTC: {err}");
                return None;
            }
        };

        let converted = frame.convert(self.config.temperature_offset);
        let reading = self.log.add_reading(
            timestamp,
            converted.temperature_celsius,
            converted.humidity_percent,
            converted.pressure_pa,
            converted.air_quality,
        );

        debug!("logged reading {reading:?}");
        Some(reading)
    }

    /// Status lines for the latest reading, or a single "no data" line.
    pub fn status_lines(&self) -> Vec<String> {
        let Some(reading) = self.log.latest() else {
            return vec![NO_DATA_LINE.to_string()];
        };

        [
            format!(
                "T: {}",
                format_temperature(reading.temperature, self.config.temperature_unit)
            ),
            format!("H: {:.1}%", reading.humidity),
            format_pressure(reading.pressure),
            format!("AQ: {}", reading.air_quality_category()),
        ]
        .into_iter()
        .map(|line| truncate_for_display(&line, self.config.line_width))
        .collect()
    }

    /// Writes [`Monitor::status_lines`] to the display, one per line index.
    /// Returns whether every line was written.
    pub fn render(&mut self) -> bool {
        for (index, line) in self.status_lines().iter().enumerate() {
            if let Err(err) = self.board.write_status_line(line, index) {
                warn!("render stopped at line {index}: {err}");
                return false;
            }
        }

        true
    }

    pub fn log(&self) -> &ReadingLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut ReadingLog {
        &mut self.log
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn into_board(self) -> B {
        self.board
    }
}
