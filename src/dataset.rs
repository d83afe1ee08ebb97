use crate::models::Sample;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Immutable date-keyed AQI lookup built once from the source file.
#[derive(Debug, Clone, Default)]
pub struct AqiDataset {
    days: BTreeMap<NaiveDate, Vec<Sample>>,
    rows_read: usize,
    rows_skipped: usize,
}

impl AqiDataset {
    pub fn builder() -> AqiDatasetBuilder {
        AqiDatasetBuilder::default()
    }

    /// Samples for `date` in source order. Never returns an empty slice.
    pub fn day(&self, date: NaiveDate) -> Option<&[Sample]> {
        self.days.get(&date).map(Vec::as_slice)
    }

    /// All days in the given calendar month, ascending.
    pub fn month(&self, year: i32, month: u32) -> impl Iterator<Item = (NaiveDate, &[Sample])> {
        let start = NaiveDate::from_ymd_opt(year, month, 1);
        let days = match start {
            Some(start) => self.days.range(start..),
            None => self.days.range(NaiveDate::MAX..NaiveDate::MAX),
        };
        days.take_while(move |(date, _)| date.year() == year && date.month() == month)
            .map(|(date, samples)| (*date, samples.as_slice()))
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.keys().next_back().copied()
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn sample_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    pub fn rows_skipped(&self) -> usize {
        self.rows_skipped
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Accumulates samples during load. Consumed by `build`, after which the
/// dataset can no longer change.
#[derive(Debug, Default)]
pub struct AqiDatasetBuilder {
    days: BTreeMap<NaiveDate, Vec<Sample>>,
    rows_read: usize,
    rows_skipped: usize,
}

impl AqiDatasetBuilder {
    pub fn push(&mut self, date: NaiveDate, sample: Sample) {
        self.rows_read += 1;
        self.days.entry(date).or_default().push(sample);
    }

    pub fn skip(&mut self) {
        self.rows_read += 1;
        self.rows_skipped += 1;
    }

    pub fn build(self) -> AqiDataset {
        AqiDataset {
            days: self.days,
            rows_read: self.rows_read,
            rows_skipped: self.rows_skipped,
        }
    }
}
