//! Load-once parsing of the AQI source file.
//!
//! The source is a spreadsheet exported as CSV with a header row. Only two
//! columns are read, located by header name:
//!
//! ```text
//! Timestamp,PM2.5,Overall_AQI
//! 2017-01-01 00:00:00,180.2,312
//! 2017-01-01 01:00:00,,
//! ```
//!
//! Rows without a usable timestamp are skipped with a warning. AQI values that
//! are missing, non-numeric or above 500 are recorded as 500.

use crate::dataset::AqiDataset;
use crate::errors::LoadError;
use crate::models::Sample;
use chrono::NaiveDate;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

pub const TIMESTAMP_COLUMN: &str = "Timestamp";
pub const AQI_COLUMN: &str = "Overall_AQI";
pub const MAX_AQI: f64 = 500.0;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("AQI_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/aqi_data.csv")
}

pub async fn load_dataset(path: &Path) -> Result<AqiDataset, LoadError> {
    let bytes = fs::read(path).await?;
    let dataset = parse_dataset(&bytes)?;

    info!(
        "loaded {} samples across {} dates from {} ({} rows skipped, range {} to {})",
        dataset.sample_count(),
        dataset.day_count(),
        path.display(),
        dataset.rows_skipped(),
        display_date(dataset.first_date()),
        display_date(dataset.last_date()),
    );
    debug!(
        "available dates: {:?}",
        dataset.dates().map(|date| date.to_string()).collect::<Vec<_>>()
    );

    Ok(dataset)
}

pub fn parse_dataset(bytes: &[u8]) -> Result<AqiDataset, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = rdr.headers()?.clone();
    let timestamp_idx = column_index(&headers, TIMESTAMP_COLUMN)?;
    let aqi_idx = column_index(&headers, AQI_COLUMN)?;

    let mut builder = AqiDataset::builder();
    for (row, result) in rdr.records().enumerate() {
        let record = result?;
        // header is line 1
        let line = row + 2;

        let timestamp = record.get(timestamp_idx).unwrap_or("");
        if timestamp.is_empty() {
            warn!("skipping row {line}: no timestamp");
            builder.skip();
            continue;
        }

        let (date, time) = split_timestamp(timestamp);
        let date = match NaiveDate::parse_from_str(date, DATE_FORMAT) {
            Ok(date) => date,
            Err(err) => {
                warn!("skipping row {line}: bad timestamp {timestamp:?}: {err}");
                builder.skip();
                continue;
            }
        };

        let aqi = clamp_aqi(record.get(aqi_idx));
        builder.push(
            date,
            Sample {
                time: time.to_string(),
                aqi,
            },
        );
    }

    Ok(builder.build())
}

/// Coerces a raw cell into `0..=500`. Anything unreadable counts as the worst
/// reading rather than being dropped.
pub fn clamp_aqi(raw: Option<&str>) -> f64 {
    match raw.map(str::trim).and_then(|value| value.parse::<f64>().ok()) {
        Some(value) if value.is_finite() && value <= MAX_AQI => value.max(0.0),
        _ => MAX_AQI,
    }
}

/// `"2017-01-01 05:00:00"` -> `("2017-01-01", "05:00:00")`.
pub fn split_timestamp(timestamp: &str) -> (&str, &str) {
    match timestamp.split_once(char::is_whitespace) {
        Some((date, time)) => (date, time.trim()),
        None => (timestamp, ""),
    }
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or(LoadError::MissingColumn(name))
}

fn display_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn clamp_replaces_missing_and_excessive_values() {
        assert_eq!(clamp_aqi(Some("42.5")), 42.5);
        assert_eq!(clamp_aqi(Some(" 500 ")), 500.0);
        assert_eq!(clamp_aqi(Some("0")), 0.0);
        assert_eq!(clamp_aqi(Some("500.01")), 500.0);
        assert_eq!(clamp_aqi(Some("9999")), 500.0);
        assert_eq!(clamp_aqi(Some("n/a")), 500.0);
        assert_eq!(clamp_aqi(Some("")), 500.0);
        assert_eq!(clamp_aqi(Some("NaN")), 500.0);
        assert_eq!(clamp_aqi(Some("inf")), 500.0);
        assert_eq!(clamp_aqi(Some("-12")), 0.0);
        assert_eq!(clamp_aqi(None), 500.0);
    }

    #[test]
    fn split_timestamp_handles_missing_time() {
        assert_eq!(split_timestamp("2017-01-01 05:00:00"), ("2017-01-01", "05:00:00"));
        assert_eq!(split_timestamp("2017-01-01"), ("2017-01-01", ""));
    }

    #[test]
    fn parse_groups_rows_by_date() {
        let csv = "\
Timestamp,PM2.5,Overall_AQI
2017-01-01 00:00:00,10.1,10
2017-01-01 01:00:00,11.2,20
2017-01-02 00:00:00,80.0,612
";
        let dataset = parse_dataset(csv.as_bytes()).unwrap();
        assert_eq!(dataset.day_count(), 2);

        let first = dataset.day(date(2017, 1, 1)).unwrap();
        assert_eq!(
            first,
            &[
                Sample { time: "00:00:00".into(), aqi: 10.0 },
                Sample { time: "01:00:00".into(), aqi: 20.0 },
            ]
        );
        let second = dataset.day(date(2017, 1, 2)).unwrap();
        assert_eq!(second[0].aqi, 500.0);
    }

    #[test]
    fn parse_skips_rows_without_timestamp() {
        let csv = "\
Overall_AQI,Timestamp
55,
60,not-a-date 00:00
70,2017-03-04 12:00
,2017-03-04 13:00
abc,2017-03-04 14:00
";
        let dataset = parse_dataset(csv.as_bytes()).unwrap();
        assert_eq!(dataset.rows_read(), 5);
        assert_eq!(dataset.rows_skipped(), 2);

        let aqis: Vec<f64> = dataset
            .day(date(2017, 3, 4))
            .unwrap()
            .iter()
            .map(|sample| sample.aqi)
            .collect();
        assert_eq!(aqis, vec![70.0, 500.0, 500.0]);
    }

    #[test]
    fn parse_accepts_short_rows() {
        let csv = "Timestamp,Overall_AQI\n2017-05-01 00:00\n";
        let dataset = parse_dataset(csv.as_bytes()).unwrap();
        assert_eq!(dataset.day(date(2017, 5, 1)).unwrap()[0].aqi, 500.0);
    }

    #[test]
    fn parse_normalizes_unpadded_dates() {
        let csv = "Timestamp,Overall_AQI\n2017-1-5 06:00,42\n";
        let dataset = parse_dataset(csv.as_bytes()).unwrap();
        assert_eq!(dataset.first_date(), Some(date(2017, 1, 5)));
        assert_eq!(dataset.rows_skipped(), 0);
    }

    #[test]
    fn parse_requires_both_columns() {
        let err = parse_dataset(b"Timestamp,PM2.5\n2017-01-01 00:00,1\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(AQI_COLUMN)));

        let err = parse_dataset(b"Date,Overall_AQI\n2017-01-01,1\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(TIMESTAMP_COLUMN)));
    }

    #[tokio::test]
    async fn load_dataset_reports_missing_file() {
        let err = load_dataset(Path::new("does/not/exist.csv")).await.unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
