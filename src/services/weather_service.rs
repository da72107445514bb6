use tracing::{debug, info, instrument};

use crate::fetch_error::FetchError;
use crate::fetcher::WeatherFetcher;
use crate::forecast::{build_forecast_table, summarize_daily};
use crate::presenter::{build_dashboard, Dashboard};

/// Orchestrates one city query: fetch both upstream responses, reshape
/// the forecast, aggregate per date, and assemble the dashboard view.
///
/// Stateless; every query recomputes everything from scratch.
#[derive(Clone)]
pub struct WeatherService {
    fetcher: WeatherFetcher,
}

impl WeatherService {
    pub fn new(fetcher: WeatherFetcher) -> Self {
        Self { fetcher }
    }

    #[instrument(skip(self), fields(city = %city))]
    pub async fn get_dashboard(&self, city: &str) -> Result<Dashboard, FetchError> {
        let (current, forecast) = self.fetcher.fetch(city).await?;
        debug!(
            "Fetched current conditions and {} forecast entries",
            forecast.list.len()
        );

        let entries = build_forecast_table(&forecast)?;
        let daily = summarize_daily(&entries);

        info!(
            "Built dashboard for {}: {} forecast entries across {} dates, {} alerts",
            current.name,
            entries.len(),
            daily.len(),
            forecast.alerts.len()
        );

        Ok(build_dashboard(&current, &entries, &daily, forecast.alerts))
    }
}
