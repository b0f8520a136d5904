use std::collections::VecDeque;

use crate::history::{Reading, TREND_WINDOW, Trend};
use crate::rtc::ClockReading;
use crate::sensor::{HUMIDITY_MAX_PERCENT, HUMIDITY_MIN_PERCENT, round_to_tenth};

/// Samples averaged by default. A proxy for "the last 24 hours" only when the
/// caller samples hourly.
pub const DEFAULT_AVERAGE_WINDOW: usize = 24;

/// Chronological, append-only history of readings.
///
/// A bounded log drops its oldest reading to make room for a new one. Nothing
/// else removes readings except [`ReadingLog::reset`].
#[derive(Debug, Clone, Default)]
pub struct ReadingLog {
    readings: VecDeque<Reading>,
    capacity: Option<usize>,
}

impl ReadingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log that keeps at most `capacity` readings. A zero capacity is
    /// treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            readings: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn add_reading(
        &mut self,
        timestamp: ClockReading,
        temperature: f64,
        humidity: f64,
        pressure: f64,
        air_quality: i32,
    ) -> Reading {
        let reading = Reading {
            timestamp,
            temperature,
            humidity: humidity.clamp(HUMIDITY_MIN_PERCENT, HUMIDITY_MAX_PERCENT),
            pressure,
            air_quality,
        };

        if let Some(capacity) = self.capacity
            && self.readings.len() >= capacity
        {
            self.readings.pop_front();
        }
        self.readings.push_back(reading);

        reading
    }

    /// The last `min(count, len)` readings, oldest first.
    pub fn get_recent_readings(&self, count: usize) -> Vec<Reading> {
        let skip = self.readings.len().saturating_sub(count);
        self.readings.iter().skip(skip).copied().collect()
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    /// Mean temperature of the last `window` readings, rounded to 0.1 °C.
    pub fn calculate_average_temperature(&self, window: usize) -> Option<f64> {
        let skip = self.readings.len().saturating_sub(window);
        let (sum, count) = self
            .readings
            .iter()
            .skip(skip)
            .fold((0.0, 0usize), |(sum, count), r| (sum + r.temperature, count + 1));

        if count == 0 {
            return None;
        }

        Some(round_to_tenth(sum / count as f64))
    }

    pub fn detect_air_quality_trend(&self) -> Trend {
        if self.readings.len() < TREND_WINDOW {
            return Trend::InsufficientData;
        }

        let len = self.readings.len();
        let first = &self.readings[len - TREND_WINDOW];
        let last = &self.readings[len - 1];

        Trend::from_scores(first.air_quality, last.air_quality)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Reading> {
        self.readings.iter()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn reset(&mut self) {
        self.readings.clear();
    }
}
