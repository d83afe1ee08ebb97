use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One reading from the source file. `aqi` is always finite and within `0..=500`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: String,
    pub aqi: f64,
}

#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MonthlyQuery {
    pub year: Option<String>,
    pub month: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAqiResponse {
    pub date: String,
    #[serde(rename = "hourlyData")]
    pub hourly_data: Vec<Sample>,
    #[serde(rename = "dailyAverageAQI")]
    pub daily_average_aqi: f64,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAqiEntry {
    #[serde(rename = "averageAQI")]
    pub average_aqi: f64,
    pub category: Category,
}

/// Keyed by `YYYY-MM-DD`, so iteration order is calendar order.
pub type MonthlyAqiResponse = BTreeMap<String, MonthlyAqiEntry>;

#[derive(Debug, Serialize, Deserialize)]
pub struct DateRangeResponse {
    pub first: Option<String>,
    pub last: Option<String>,
    pub days: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
