use chrono::NaiveDate;
use serde::Serialize;

use crate::fetcher::{CurrentResponse, WeatherAlert};
use crate::forecast::{DailySummary, ForecastEntry};

const CHART_X_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Current-conditions snapshot as shown in the left column.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub city_name: String,
    pub country: String,
    pub description: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub humidity: f64,
    pub wind_speed_mps: f64,
}

impl CurrentConditions {
    pub fn from_response(response: &CurrentResponse) -> Self {
        let description = response
            .weather
            .first()
            .map(|w| capitalize(&w.description))
            .unwrap_or_default();

        Self {
            city_name: response.name.clone(),
            country: response.sys.country.clone(),
            description,
            temp_c: response.main.temp,
            temp_f: crate::forecast::celsius_to_fahrenheit(response.main.temp),
            humidity: response.main.humidity,
            wind_speed_mps: response.wind.speed,
        }
    }

    pub fn heading(&self) -> String {
        format!("Weather in {}, {}", self.city_name, self.country)
    }

    /// The text block rendered under the heading, one line per metric.
    /// Temperatures are rounded to one decimal place here and only here.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Temperature: {:.1}°C / {:.1}°F", self.temp_c, self.temp_f),
            format!("Condition: {}", self.description),
            format!("Humidity: {}%", self.humidity),
            format!("Wind Speed: {} m/s", self.wind_speed_mps),
        ]
    }
}

/// One row of the daily min/max list, carrying both the date and its
/// display text.
#[derive(Debug, Clone, Serialize)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub text: String,
}

pub fn format_daily_row(summary: &DailySummary) -> DailyRow {
    DailyRow {
        date: summary.date,
        text: format!(
            "{}: Min {:.1}°C / {:.1}°F — Max {:.1}°C / {:.1}°F",
            summary.date.format("%A, %b %d"),
            summary.temp_min_c,
            summary.temp_min_f,
            summary.temp_max_c,
            summary.temp_max_f,
        ),
    }
}

/// One plotted series: x values are formatted timestamps, y values are
/// unrounded temperatures.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub mode: String,
    pub color: String,
    pub dash: Option<String>,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub series: Vec<ChartSeries>,
}

/// The two chart tabs on the right column.
#[derive(Debug, Clone, Serialize)]
pub struct ChartTabs {
    pub celsius: ChartSpec,
    pub fahrenheit: ChartSpec,
}

pub fn build_charts(entries: &[ForecastEntry]) -> ChartTabs {
    let x: Vec<String> = entries
        .iter()
        .map(|e| e.datetime.format(CHART_X_FORMAT).to_string())
        .collect();

    let spec = |unit: &str, temp: Vec<f64>, min: Vec<f64>, max: Vec<f64>| ChartSpec {
        title: format!(
            "5-Day Forecast - {}",
            if unit == "°C" { "Celsius" } else { "Fahrenheit" }
        ),
        x_axis_title: "Date & Time".to_string(),
        y_axis_title: format!("Temperature ({unit})"),
        series: vec![
            ChartSeries {
                name: format!("Temp ({unit})"),
                mode: "lines+markers".to_string(),
                color: "firebrick".to_string(),
                dash: None,
                x: x.clone(),
                y: temp,
            },
            ChartSeries {
                name: format!("Min Temp ({unit})"),
                mode: "lines".to_string(),
                color: "royalblue".to_string(),
                dash: Some("dash".to_string()),
                x: x.clone(),
                y: min,
            },
            ChartSeries {
                name: format!("Max Temp ({unit})"),
                mode: "lines".to_string(),
                color: "orange".to_string(),
                dash: Some("dash".to_string()),
                x: x.clone(),
                y: max,
            },
        ],
    };

    ChartTabs {
        celsius: spec(
            "°C",
            entries.iter().map(|e| e.temp_c).collect(),
            entries.iter().map(|e| e.temp_min_c).collect(),
            entries.iter().map(|e| e.temp_max_c).collect(),
        ),
        fahrenheit: spec(
            "°F",
            entries.iter().map(|e| e.temp_f).collect(),
            entries.iter().map(|e| e.temp_min_f).collect(),
            entries.iter().map(|e| e.temp_max_f).collect(),
        ),
    }
}

/// Everything the dashboard page renders for one city query.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub current: CurrentConditions,
    pub heading: String,
    pub summary_lines: Vec<String>,
    pub daily: Vec<DailyRow>,
    pub alerts: Vec<WeatherAlert>,
    pub charts: ChartTabs,
}

pub fn build_dashboard(
    current: &CurrentResponse,
    entries: &[ForecastEntry],
    daily: &[DailySummary],
    alerts: Vec<WeatherAlert>,
) -> Dashboard {
    let current = CurrentConditions::from_response(current);
    let heading = current.heading();
    let summary_lines = current.summary_lines();

    Dashboard {
        heading,
        summary_lines,
        daily: daily.iter().map(format_daily_row).collect(),
        alerts,
        charts: build_charts(entries),
        current,
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
