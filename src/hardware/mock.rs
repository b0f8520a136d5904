use log::debug;

use crate::hardware::{Board, BoardError, Peripheral};
use crate::rtc::{BcdError, ClockReading, ClockRegisters};
use crate::sensor::RawSensorFrame;

/// In-memory board for tests.
///
/// The clock is held as raw RTC register bytes, so every write and read goes
/// through the same BCD encoding the real chip sees.
#[derive(Debug, Clone)]
pub struct MockBoard {
    pub clock_registers: Option<ClockRegisters>,

    pub sensor_frame: RawSensorFrame,

    pub display_lines: Vec<String>,

    /// When set, every operation fails as if the bus were disconnected.
    pub bus_errors: bool,

    pub clock_writes: usize,
}

impl Default for MockBoard {
    fn default() -> Self {
        Self {
            clock_registers: None,
            sensor_frame: RawSensorFrame {
                temperature: 25000,
                pressure: 10132500,
                humidity: 45000,
                air_quality: 75,
            },
            display_lines: Vec::new(),
            bus_errors: false,
            clock_writes: 0,
        }
    }
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the clock registers directly, bypassing `write_clock`.
    pub fn set_clock(&mut self, reading: &ClockReading) -> Result<(), BcdError> {
        self.clock_registers = Some(ClockRegisters::encode(reading)?);
        Ok(())
    }
}

impl Board for MockBoard {
    fn read_clock(&mut self) -> Result<Option<ClockReading>, BoardError> {
        if self.bus_errors {
            return Err(BoardError::NoAcknowledge(Peripheral::Clock));
        }

        let Some(registers) = self.clock_registers else {
            return Ok(None);
        };

        match registers.decode() {
            Ok(reading) => Ok(Some(reading)),
            Err(err) => {
                debug!("mock clock registers hold no valid time: {err}");
                Ok(None)
            }
        }
    }

    fn write_clock(&mut self, reading: &ClockReading) -> Result<(), BoardError> {
        if self.bus_errors {
            return Err(BoardError::NoAcknowledge(Peripheral::Clock));
        }

        self.clock_registers = Some(ClockRegisters::encode(reading)?);
        self.clock_writes += 1;
        Ok(())
    }

    fn read_raw_sensor(&mut self) -> Result<RawSensorFrame, BoardError> {
        if self.bus_errors {
            return Err(BoardError::Transfer {
                peripheral: Peripheral::Sensor,
                reason: "simulated bus error".to_string(),
            });
        }

        Ok(self.sensor_frame)
    }

    fn write_status_line(&mut self, text: &str, line: usize) -> Result<(), BoardError> {
        if self.bus_errors {
            return Err(BoardError::NoAcknowledge(Peripheral::Display));
        }

        if self.display_lines.len() <= line {
            self.display_lines.resize(line + 1, String::new());
        }
        self.display_lines[line] = text.to_string();
        Ok(())
    }
}
