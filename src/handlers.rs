use crate::errors::AppError;
use crate::models::{
    DailyAqiResponse, DailyQuery, DateRangeResponse, MonthlyAqiResponse, MonthlyQuery,
};
use crate::state::AppState;
use crate::stats::{daily_summary, monthly_summary};
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::NaiveDate;
use tracing::debug;

const NO_DATA_FOR_DATE: &str = "No data available for the requested date.";

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let initial_month = state
        .dataset
        .last_date()
        .map(|date| date.format("%Y-%m").to_string())
        .unwrap_or_default();
    Html(render_index(&initial_month))
}

pub async fn get_daily_aqi(
    State(state): State<AppState>,
    Query(query): Query<DailyQuery>,
) -> Result<Json<DailyAqiResponse>, AppError> {
    let date = parse_date(query.date.as_deref())?;

    match daily_summary(&state.dataset, date) {
        Some(summary) => Ok(Json(summary)),
        None => {
            debug!("no data available for requested date {date}");
            Err(AppError::not_found(NO_DATA_FOR_DATE))
        }
    }
}

pub async fn get_monthly_aqi(
    State(state): State<AppState>,
    Query(query): Query<MonthlyQuery>,
) -> Result<Json<MonthlyAqiResponse>, AppError> {
    let year = parse_year(query.year.as_deref())?;
    let month = parse_month(query.month.as_deref())?;

    let summary = monthly_summary(&state.dataset, year, month);
    if summary.is_empty() {
        debug!("no data available for {year}-{month:02}");
    }
    Ok(Json(summary))
}

pub async fn get_date_range(State(state): State<AppState>) -> Json<DateRangeResponse> {
    let dataset = &state.dataset;
    Json(DateRangeResponse {
        first: dataset.first_date().map(|date| date.to_string()),
        last: dataset.last_date().map(|date| date.to_string()),
        days: dataset.day_count(),
    })
}

/// Only the exact `YYYY-MM-DD` key can match a loaded day; anything else is
/// reported the same way as a date with no data.
fn parse_date(raw: Option<&str>) -> Result<NaiveDate, AppError> {
    let raw = raw.map(str::trim).unwrap_or("");
    let bytes = raw.as_bytes();
    let padded = bytes.len() == 10 && bytes[4] == b'-' && bytes[7] == b'-';
    padded
        .then(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .flatten()
        .ok_or_else(|| {
            debug!("unparseable date {raw:?}");
            AppError::not_found(NO_DATA_FOR_DATE)
        })
}

fn parse_year(raw: Option<&str>) -> Result<i32, AppError> {
    raw.map(str::trim)
        .and_then(|value| value.parse::<i32>().ok())
        .ok_or_else(|| AppError::bad_request("year must be a number such as 2017"))
}

/// A numeric month outside `1..=12` is accepted; it simply matches no days.
fn parse_month(raw: Option<&str>) -> Result<u32, AppError> {
    raw.map(str::trim)
        .and_then(|value| value.parse::<u32>().ok())
        .ok_or_else(|| AppError::bad_request("month must be a number such as 01"))
}
