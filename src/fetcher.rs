use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::fetch_error::FetchError;

// Wire models for the OpenWeatherMap endpoints. Only the fields the
// dashboard consumes are declared; serde ignores the rest.

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    pub main: CurrentMain,
    pub wind: Wind,
    pub weather: Vec<WeatherDescription>,
    pub sys: Sys,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentMain {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherDescription {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sys {
    pub country: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastItem>,
    /// Not part of the documented standard-tier forecast shape; tolerated
    /// when present, never required.
    #[serde(default)]
    pub alerts: Vec<WeatherAlert>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastItem {
    pub dt_txt: String,
    pub main: ForecastMain,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastMain {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherAlert {
    pub event: String,
    pub description: String,
}

#[derive(Clone)]
pub struct WeatherFetcher {
    client: reqwest::Client,
    weather_url: String,
    forecast_url: String,
    api_key: String,
}

impl WeatherFetcher {
    pub fn new(weather_url: String, forecast_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            weather_url,
            forecast_url,
            api_key,
        }
    }

    /// Fetch current conditions and the 5-day/3-hour forecast for a city.
    ///
    /// The two calls are issued sequentially; if either one does not report
    /// success the whole query fails. No retries, no partial results.
    #[instrument(skip(self), fields(city = %city))]
    pub async fn fetch(
        &self,
        city: &str,
    ) -> Result<(CurrentResponse, ForecastResponse), FetchError> {
        let current = self.fetch_current(city).await?;
        let forecast = self.fetch_forecast(city).await?;
        Ok((current, forecast))
    }

    #[instrument(skip(self), fields(city = %city))]
    pub async fn fetch_current(&self, city: &str) -> Result<CurrentResponse, FetchError> {
        debug!("Sending current-conditions request");
        let response = self
            .client
            .get(&self.weather_url)
            .query(&[("q", city), ("appid", &self.api_key), ("units", "metric")])
            .send()
            .await?;

        let status = response.status();
        debug!("Received current-conditions response with status: {}", status);
        if !status.is_success() {
            warn!("Current-conditions request for '{}' returned {}", city, status);
            return Err(FetchError::CityNotFound(city.to_string()));
        }

        Ok(response.json().await?)
    }

    #[instrument(skip(self), fields(city = %city))]
    pub async fn fetch_forecast(&self, city: &str) -> Result<ForecastResponse, FetchError> {
        debug!("Sending forecast request");
        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[("q", city), ("appid", &self.api_key), ("units", "metric")])
            .send()
            .await?;

        let status = response.status();
        debug!("Received forecast response with status: {}", status);
        if !status.is_success() {
            warn!("Forecast request for '{}' returned {}", city, status);
            return Err(FetchError::CityNotFound(city.to_string()));
        }

        Ok(response.json().await?)
    }
}
