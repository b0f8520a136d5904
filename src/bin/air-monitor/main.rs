mod args;
mod board;
mod csv;

use std::fs::File;
use std::process::ExitCode;

use air_quality_board::display::{format_clock_line, format_temperature};
use air_quality_board::hardware::Board as _;
use air_quality_board::history::DEFAULT_AVERAGE_WINDOW;
use air_quality_board::monitor::{Monitor, MonitorConfig};
use anyhow::{Context as _, Result};
use args::Args;
use chrono::Utc;
use clap::Parser as _;
use log::{error, info, warn};
use tokio::time::{Duration, sleep};

use crate::board::HostBoard;
use crate::csv::CsvFrameIter;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    if let Err(e) = run().await {
        error!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let file = File::open(&args.frames)
        .with_context(|| format!("failed to open file: {:?}", args.frames))?;
    let frames = CsvFrameIter::new(file).context("failed to create CSV frame iterator")?;

    let config = MonitorConfig {
        log_capacity: Some(args.capacity),
        temperature_offset: args.temperature_offset,
        temperature_unit: args.unit,
        ..MonitorConfig::default()
    };
    let mut monitor = Monitor::with_config(HostBoard::new(frames), config);

    let now = Utc::now().with_timezone(&args.timezone).naive_local();
    if !monitor.sync_clock(&now) {
        warn!("RTC was not updated from {now}");
    }

    match monitor.board_mut().read_clock() {
        Ok(Some(clock)) => info!("RTC time: {}", format_clock_line(&clock)),
        Ok(None) => warn!("RTC holds no valid time"),
        Err(err) => warn!("failed to read RTC: {err}"),
    }

    let mut taken = 0;
    loop {
        if monitor.sample().is_some() {
            taken += 1;
        } else if monitor.board().is_exhausted() {
            break;
        }

        monitor.render();

        if args.samples.is_some_and(|limit| taken >= limit) {
            break;
        }

        sleep(Duration::from_secs(args.interval_secs)).await;
    }

    let log = monitor.log();
    let average = log
        .calculate_average_temperature(DEFAULT_AVERAGE_WINDOW)
        .map(|celsius| format_temperature(celsius, monitor.config().temperature_unit))
        .unwrap_or_else(|| "n/a".to_string());

    info!(
        "logged {} readings, average temperature {}, air quality {}",
        log.len(),
        average,
        log.detect_air_quality_trend()
    );

    Ok(())
}
