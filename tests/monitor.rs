use air_quality_board::hardware::{Board, MockBoard};
use air_quality_board::history::Trend;
use air_quality_board::monitor::Monitor;
use air_quality_board::rtc::ClockReading;
use air_quality_board::sensor::RawSensorFrame;
use chrono::{NaiveDate, NaiveDateTime};

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 4)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

fn board_with_clock(reading: ClockReading) -> MockBoard {
    let mut board = MockBoard::new();
    board.set_clock(&reading).unwrap();
    board
}

#[test]
fn test_clock_sync_rewrites_stale_clock() {
    let stale = ClockReading {
        year: 2020,
        month: 1,
        day: 1,
        hour: 12,
        minute: 0,
        second: 0,
        weekday: 1,
    };
    let mut monitor = Monitor::new(board_with_clock(stale));

    assert!(monitor.sync_clock(&reference()));

    let after = monitor.board_mut().read_clock().unwrap().unwrap();
    assert_eq!(after.year, 2025);
    assert_eq!(after.month, 7);
    assert_eq!(after.day, 4);
    assert_eq!(after.weekday, 5);
    assert_eq!(monitor.board().clock_writes, 1);
}

#[test]
fn test_clock_sync_keeps_current_clock() {
    let current = ClockReading::new(2025, 7, 4, 14, 30, 0).unwrap();
    let mut monitor = Monitor::new(board_with_clock(current));

    assert!(!monitor.sync_clock(&reference()));
    assert_eq!(monitor.board().clock_writes, 0);
}

#[test]
fn test_clock_sync_rewrites_clock_far_in_future() {
    let future = ClockReading::new(2030, 1, 1, 12, 0, 0).unwrap();
    let mut monitor = Monitor::new(board_with_clock(future));

    assert!(monitor.sync_clock(&reference()));
    assert_eq!(
        monitor.board_mut().read_clock().unwrap(),
        ClockReading::from_naive(&reference()).ok()
    );
}

#[test]
fn test_sample_converts_and_logs() {
    let mut board = board_with_clock(ClockReading::new(2025, 7, 4, 14, 30, 0).unwrap());
    board.sensor_frame = RawSensorFrame {
        temperature: 25500,
        pressure: 10132500,
        humidity: 45000,
        air_quality: 75,
    };
    let mut monitor = Monitor::new(board);

    let reading = monitor.sample().unwrap();

    assert_eq!(reading.temperature, 25.5);
    assert_eq!(reading.humidity, 45.0);
    assert_eq!(reading.pressure, 101325.0);
    assert_eq!(reading.air_quality, 75);
    assert_eq!(reading.timestamp.year, 2025);
    assert_eq!(monitor.log().len(), 1);
}

#[test]
fn test_render_writes_four_lines() {
    let mut monitor = Monitor::new(board_with_clock(
        ClockReading::new(2025, 7, 4, 14, 30, 0).unwrap(),
    ));
    monitor.sample().unwrap();

    assert!(monitor.render());

    let lines = &monitor.board().display_lines;
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "T: 25.0°C");
    assert_eq!(lines[1], "H: 45.0%");
    assert_eq!(lines[2], "101.3kPa");
    assert_eq!(lines[3], "AQ: Good");
}

#[test]
fn test_render_without_data() {
    let mut monitor = Monitor::new(MockBoard::new());

    assert!(monitor.render());
    assert_eq!(monitor.board().display_lines, vec!["No data".to_string()]);
}

#[test]
fn test_bus_errors_are_contained() {
    let mut board = board_with_clock(ClockReading::new(2020, 1, 1, 12, 0, 0).unwrap());
    board.bus_errors = true;
    let mut monitor = Monitor::new(board);

    assert!(!monitor.sync_clock(&reference()));
    assert_eq!(monitor.sample(), None);
    assert!(monitor.log().is_empty());
    assert!(!monitor.render());
}

#[test]
fn test_failed_sample_keeps_previous_log() {
    let mut monitor = Monitor::new(board_with_clock(
        ClockReading::new(2025, 7, 4, 14, 30, 0).unwrap(),
    ));
    let first = monitor.sample().unwrap();

    monitor.board_mut().bus_errors = true;
    assert_eq!(monitor.sample(), None);

    assert_eq!(monitor.log().len(), 1);
    assert_eq!(monitor.log().latest(), Some(&first));
}

#[test]
fn test_repeated_samples_track_trend() {
    let mut monitor = Monitor::new(board_with_clock(
        ClockReading::new(2025, 7, 4, 14, 30, 0).unwrap(),
    ));

    for air_quality in [50, 60, 71] {
        monitor.board_mut().sensor_frame.air_quality = air_quality;
        monitor.sample().unwrap();
    }

    assert_eq!(monitor.log().detect_air_quality_trend(), Trend::Worsening);
    assert_eq!(monitor.log().calculate_average_temperature(24), Some(25.0));
}
