use crate::hardware::BoardError;
use crate::rtc::ClockReading;
use crate::sensor::RawSensorFrame;

/// The four operations the monitor needs from the sensing board.
///
/// An `Err` always means the exchange itself failed. Implementations never
/// retry; the caller decides what to do next.
pub trait Board {
    /// Reads the RTC. `Ok(None)` means the registers do not hold a valid time,
    /// e.g. after the backup battery ran flat.
    fn read_clock(&mut self) -> Result<Option<ClockReading>, BoardError>;

    fn write_clock(&mut self, reading: &ClockReading) -> Result<(), BoardError>;

    fn read_raw_sensor(&mut self) -> Result<RawSensorFrame, BoardError>;

    /// Writes one line of text. Text wider than the display is the
    /// implementation's to clip.
    fn write_status_line(&mut self, text: &str, line: usize) -> Result<(), BoardError>;
}

impl<B: Board + ?Sized> Board for &mut B {
    fn read_clock(&mut self) -> Result<Option<ClockReading>, BoardError> {
        (**self).read_clock()
    }

    fn write_clock(&mut self, reading: &ClockReading) -> Result<(), BoardError> {
        (**self).write_clock(reading)
    }

    fn read_raw_sensor(&mut self) -> Result<RawSensorFrame, BoardError> {
        (**self).read_raw_sensor()
    }

    fn write_status_line(&mut self, text: &str, line: usize) -> Result<(), BoardError> {
        (**self).write_status_line(text, line)
    }
}
