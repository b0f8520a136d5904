use std::time::Instant;

use air_quality_board::hardware::{Board, BoardError, Peripheral};
use air_quality_board::rtc::{ClockReading, ClockRegisters};
use air_quality_board::sensor::RawSensorFrame;
use chrono::TimeDelta;
use log::debug;

use crate::csv::CsvFrameIter;

/// Board stand-in for running the monitor on a host.
///
/// The RTC is simulated as a set of register bytes plus the instant they were
/// written; it starts blank, as a board with a flat backup battery would.
/// Sensor frames are replayed from CSV and status lines go to stdout.
#[derive(Debug)]
pub struct HostBoard {
    frames: CsvFrameIter,
    clock: Option<(ClockRegisters, Instant)>,
    exhausted: bool,
}

impl HostBoard {
    pub fn new(frames: CsvFrameIter) -> Self {
        Self {
            frames,
            clock: None,
            exhausted: false,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl Board for HostBoard {
    fn read_clock(&mut self) -> Result<Option<ClockReading>, BoardError> {
        let Some((registers, written_at)) = self.clock else {
            return Ok(None);
        };

        let stored = match registers.decode() {
            Ok(stored) => stored,
            Err(err) => {
                debug!("simulated RTC holds no valid time: {err}");
                return Ok(None);
            }
        };

        let Some(stored) = stored.to_naive() else {
            return Ok(None);
        };

        let elapsed = TimeDelta::from_std(written_at.elapsed()).map_err(|e| BoardError::Transfer {
            peripheral: Peripheral::Clock,
            reason: e.to_string(),
        })?;

        Ok(ClockReading::from_naive(&(stored + elapsed)).ok())
    }

    fn write_clock(&mut self, reading: &ClockReading) -> Result<(), BoardError> {
        self.clock = Some((ClockRegisters::encode(reading)?, Instant::now()));
        Ok(())
    }

    fn read_raw_sensor(&mut self) -> Result<RawSensorFrame, BoardError> {
        match self.frames.next() {
            Some(Ok(frame)) => Ok(frame),
            Some(Err(err)) => Err(BoardError::Transfer {
                peripheral: Peripheral::Sensor,
                reason: format!("{err:#}"),
            }),
            None => {
                self.exhausted = true;
                Err(BoardError::Transfer {
                    peripheral: Peripheral::Sensor,
                    reason: "no more frames to replay".to_string(),
                })
            }
        }
    }

    fn write_status_line(&mut self, text: &str, line: usize) -> Result<(), BoardError> {
        println!("[{line}] {text}");
        Ok(())
    }
}
