use crate::category::Category;
use crate::dataset::AqiDataset;
use crate::models::{DailyAqiResponse, MonthlyAqiEntry, MonthlyAqiResponse, Sample};
use chrono::NaiveDate;

/// Unweighted mean of the samples' AQI, `None` for an empty slice.
pub fn average_aqi(samples: &[Sample]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let total: f64 = samples.iter().map(|sample| sample.aqi).sum();
    Some(total / samples.len() as f64)
}

pub fn round_2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounded daily average and the category of that rounded value.
pub fn summarize(samples: &[Sample]) -> Option<MonthlyAqiEntry> {
    let average_aqi = round_2(average_aqi(samples)?);
    Some(MonthlyAqiEntry {
        average_aqi,
        category: Category::from_aqi(average_aqi),
    })
}

pub fn daily_summary(dataset: &AqiDataset, date: NaiveDate) -> Option<DailyAqiResponse> {
    let samples = dataset.day(date)?;
    let summary = summarize(samples)?;
    Some(DailyAqiResponse {
        date: date_key(date),
        hourly_data: samples.to_vec(),
        daily_average_aqi: summary.average_aqi,
        category: summary.category,
    })
}

pub fn monthly_summary(dataset: &AqiDataset, year: i32, month: u32) -> MonthlyAqiResponse {
    dataset
        .month(year, month)
        .filter_map(|(date, samples)| Some((date_key(date), summarize(samples)?)))
        .collect()
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: &str, aqi: f64) -> Sample {
        Sample {
            time: time.to_string(),
            aqi,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dataset() -> AqiDataset {
        let mut builder = AqiDataset::builder();
        builder.push(date(2017, 1, 1), sample("00:00", 10.0));
        builder.push(date(2017, 1, 1), sample("01:00", 20.0));
        builder.push(date(2017, 1, 2), sample("00:00", 100.0));
        builder.push(date(2017, 1, 2), sample("01:00", 101.0));
        builder.push(date(2017, 1, 2), sample("02:00", 101.0));
        builder.push(date(2017, 2, 1), sample("00:00", 500.0));
        builder.build()
    }

    #[test]
    fn average_of_two_samples() {
        assert_eq!(average_aqi(&[sample("a", 10.0), sample("b", 20.0)]), Some(15.0));
        assert_eq!(average_aqi(&[]), None);
    }

    #[test]
    fn round_2_keeps_two_decimals() {
        assert_eq!(round_2(100.666_666), 100.67);
        assert_eq!(round_2(15.0), 15.0);
        assert_eq!(round_2(50.004), 50.0);
    }

    #[test]
    fn daily_summary_includes_samples() {
        let data = dataset();
        let day = daily_summary(&data, date(2017, 1, 1)).expect("missing day");
        assert_eq!(day.date, "2017-01-01");
        assert_eq!(day.daily_average_aqi, 15.0);
        assert_eq!(day.category, Category::Good);
        assert_eq!(day.hourly_data.len(), 2);
    }

    #[test]
    fn category_uses_rounded_average() {
        let data = dataset();
        let day = daily_summary(&data, date(2017, 1, 2)).unwrap();
        assert_eq!(day.daily_average_aqi, 100.67);
        assert_eq!(day.category, Category::Moderate);
    }

    #[test]
    fn daily_summary_unknown_date() {
        assert!(daily_summary(&dataset(), date(2020, 1, 1)).is_none());
    }

    #[test]
    fn monthly_summary_per_day() {
        let data = dataset();
        let january = monthly_summary(&data, 2017, 1);
        assert_eq!(january.len(), 2);
        assert_eq!(january["2017-01-01"].average_aqi, 15.0);
        assert_eq!(january["2017-01-02"].category, Category::Moderate);

        let february = monthly_summary(&data, 2017, 2);
        assert_eq!(february["2017-02-01"].category, Category::Severe);
    }

    #[test]
    fn monthly_summary_empty_month() {
        let march = monthly_summary(&dataset(), 2017, 3);
        assert!(march.is_empty());
        assert_eq!(serde_json::to_string(&march).unwrap(), "{}");
    }
}
