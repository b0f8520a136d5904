use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};

use air_quality_board::sensor::RawSensorFrame;
use anyhow::{Context as _, Result};
use csv::{Reader, StringRecord};

const TEMPERATURE_INDEX: usize = 0;
const PRESSURE_INDEX: usize = 1;
const HUMIDITY_INDEX: usize = 2;
const AIR_QUALITY_INDEX: usize = 3;

#[derive(Debug, Clone, Copy)]
enum CsvFormat {
    TemperaturePressureHumidity,
    TemperaturePressureHumidityAirQuality,
}

#[derive(Debug)]
pub struct CsvFrameIter {
    reader: Reader<File>,
    format: CsvFormat,
}

impl CsvFrameIter {
    pub fn new(mut file: File) -> Result<Self> {
        let mut buf_reader = BufReader::new(&file);
        let mut header = String::new();
        buf_reader
            .read_line(&mut header)
            .context("failed to read CSV header")?;

        let format = detect_format(&header);

        file.seek(SeekFrom::Start(0))
            .context("failed to seek to start of file")?;
        let reader = Reader::from_reader(file);

        Ok(Self { reader, format })
    }
}

impl Iterator for CsvFrameIter {
    type Item = Result<RawSensorFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = match self.reader.records().next()? {
            Ok(row) => row,
            Err(e) => return Some(Err(e.into())),
        };

        let frame = (|| -> Result<RawSensorFrame> {
            let temperature = parse_field(&row, TEMPERATURE_INDEX, "temperature")?;
            let pressure = parse_field(&row, PRESSURE_INDEX, "pressure")?;
            let humidity = parse_field(&row, HUMIDITY_INDEX, "humidity")?;
            let air_quality = match self.format {
                CsvFormat::TemperaturePressureHumidity => 0,
                CsvFormat::TemperaturePressureHumidityAirQuality => {
                    parse_field(&row, AIR_QUALITY_INDEX, "air quality")?
                }
            };

            Ok(RawSensorFrame {
                temperature,
                pressure,
                humidity,
                air_quality,
            })
        })();

        Some(frame)
    }
}

fn parse_field(row: &StringRecord, index: usize, name: &str) -> Result<i32> {
    let field = row
        .get(index)
        .with_context(|| format!("missing {name} column at index {index}"))?;

    field
        .trim()
        .parse()
        .with_context(|| format!("failed to parse {name}: {field}"))
}

fn detect_format(header: &str) -> CsvFormat {
    if header.to_ascii_lowercase().contains("air_quality") {
        return CsvFormat::TemperaturePressureHumidityAirQuality;
    }

    CsvFormat::TemperaturePressureHumidity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        let row = StringRecord::from(vec!["25000", " 10132500 ", "x"]);

        assert_eq!(parse_field(&row, 0, "temperature").unwrap(), 25000);
        assert_eq!(parse_field(&row, 1, "pressure").unwrap(), 10132500);
        assert!(parse_field(&row, 2, "humidity").is_err());
    }

    #[test]
    fn test_parse_field_reports_missing_column() {
        let row = StringRecord::from(vec!["25000", "10132500"]);

        let err = parse_field(&row, HUMIDITY_INDEX, "humidity").unwrap_err();
        assert_eq!(err.to_string(), "missing humidity column at index 2");
    }

    #[test]
    fn test_detect_format() {
        assert!(matches!(
            detect_format("temperature,pressure,humidity\n"),
            CsvFormat::TemperaturePressureHumidity
        ));
        assert!(matches!(
            detect_format("Temperature,Pressure,Humidity,Air_Quality\n"),
            CsvFormat::TemperaturePressureHumidityAirQuality
        ));
    }
}
