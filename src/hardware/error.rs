use std::fmt;

use crate::rtc::BcdError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Peripheral {
    Clock,
    Sensor,
    Display,
}

impl Peripheral {
    pub fn as_str(&self) -> &'static str {
        match self {
            Peripheral::Clock => "RTC",
            Peripheral::Sensor => "BME688",
            Peripheral::Display => "OLED",
        }
    }
}

impl fmt::Display for Peripheral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed exchange with one of the board's peripherals.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("{0} did not acknowledge")]
    NoAcknowledge(Peripheral),

    #[error("{peripheral} transfer failed: {reason}")]
    Transfer {
        peripheral: Peripheral,
        reason: String,
    },

    #[error("failed to encode clock registers")]
    Encode(#[from] BcdError),
}
