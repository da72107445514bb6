use std::env;

const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const DEFAULT_FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub server_host: String,
    pub server_port: u16,
    pub weather_url: String,
    pub forecast_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `OPENWEATHER_API_KEY` is required; everything else has a default.
    /// `WEATHER_URL` and `FORECAST_URL` exist so tests can point the
    /// fetcher at a mock server.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Config {
            api_key: env::var("OPENWEATHER_API_KEY")?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            weather_url: env::var("WEATHER_URL")
                .unwrap_or_else(|_| DEFAULT_WEATHER_URL.to_string()),
            forecast_url: env::var("FORECAST_URL")
                .unwrap_or_else(|_| DEFAULT_FORECAST_URL.to_string()),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
