use chrono::{NaiveDate, NaiveDateTime};

use crate::fetch_error::FetchError;
use crate::fetcher::ForecastResponse;

const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One 3-hour forecast sample, with Fahrenheit columns derived on ingest.
///
/// Fahrenheit values are exact (`F = C * 9/5 + 32`); rounding happens only
/// at display time in the presenter.
#[derive(Debug, Clone)]
pub struct ForecastEntry {
    pub datetime: NaiveDateTime,
    pub temp_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub temp_f: f64,
    pub temp_min_f: f64,
    pub temp_max_f: f64,
}

/// Per-calendar-date min/max aggregation over forecast entries.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub temp_min_f: f64,
    pub temp_max_f: f64,
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Reshape the forecast response into one row per 3-hour timestamp.
///
/// Fails only on a malformed `dt_txt`; temperatures are taken as-is.
pub fn build_forecast_table(forecast: &ForecastResponse) -> Result<Vec<ForecastEntry>, FetchError> {
    forecast
        .list
        .iter()
        .map(|item| {
            let datetime = NaiveDateTime::parse_from_str(&item.dt_txt, DT_TXT_FORMAT)
                .map_err(|e| FetchError::DateTimeError(format!("'{}': {}", item.dt_txt, e)))?;

            Ok(ForecastEntry {
                datetime,
                temp_c: item.main.temp,
                temp_min_c: item.main.temp_min,
                temp_max_c: item.main.temp_max,
                temp_f: celsius_to_fahrenheit(item.main.temp),
                temp_min_f: celsius_to_fahrenheit(item.main.temp_min),
                temp_max_f: celsius_to_fahrenheit(item.main.temp_max),
            })
        })
        .collect()
}

/// Group entries by the date portion of their timestamp and reduce with
/// `min` over minimums and `max` over maximums, independently per unit.
///
/// Output rows follow the order dates first appear in the input, which is
/// ascending for the time-ordered forecast list.
pub fn summarize_daily(entries: &[ForecastEntry]) -> Vec<DailySummary> {
    let mut summaries: Vec<DailySummary> = Vec::new();

    for entry in entries {
        let date = entry.datetime.date();
        match summaries.iter_mut().find(|s| s.date == date) {
            Some(summary) => {
                summary.temp_min_c = summary.temp_min_c.min(entry.temp_min_c);
                summary.temp_max_c = summary.temp_max_c.max(entry.temp_max_c);
                summary.temp_min_f = summary.temp_min_f.min(entry.temp_min_f);
                summary.temp_max_f = summary.temp_max_f.max(entry.temp_max_f);
            }
            None => summaries.push(DailySummary {
                date,
                temp_min_c: entry.temp_min_c,
                temp_max_c: entry.temp_max_c,
                temp_min_f: entry.temp_min_f,
                temp_max_f: entry.temp_max_f,
            }),
        }
    }

    summaries
}
