use std::path::PathBuf;

use air_quality_board::display::TemperatureUnit;
use air_quality_board::monitor::DEFAULT_LOG_CAPACITY;
use chrono_tz::Tz;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// CSV file of raw sensor frames to replay.
    #[arg(long)]
    pub frames: PathBuf,

    #[arg(long, env = "TZ")]
    pub timezone: Tz,

    #[arg(long, default_value_t = 5)]
    pub interval_secs: u64,

    #[arg(long, default_value_t = DEFAULT_LOG_CAPACITY)]
    pub capacity: usize,

    #[arg(long, default_value_t = TemperatureUnit::Celsius)]
    pub unit: TemperatureUnit,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub temperature_offset: f64,

    /// Stop after this many successful samples.
    #[arg(long)]
    pub samples: Option<usize>,
}
