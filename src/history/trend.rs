use std::fmt;

/// Minimum IAQ change across the trend window that counts as movement.
pub const TREND_THRESHOLD: i32 = 10;

/// Number of trailing readings the trend looks at.
pub const TREND_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    InsufficientData,
    Stable,
    Worsening,
    Improving,
}

impl Trend {
    /// Compares the oldest and newest IAQ scores of the trailing window.
    ///
    /// Readings between the two ends are ignored, so a spike in the middle of
    /// the window does not register.
    pub fn from_scores(first: i32, last: i32) -> Self {
        let (first, last) = (i64::from(first), i64::from(last));
        let threshold = i64::from(TREND_THRESHOLD);

        if last > first + threshold {
            Trend::Worsening
        } else if last < first - threshold {
            Trend::Improving
        } else {
            Trend::Stable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::InsufficientData => "insufficient_data",
            Trend::Stable => "stable",
            Trend::Worsening => "worsening",
            Trend::Improving => "improving",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
