#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("City not found: {0}")]
    CityNotFound(String),
    #[error("Failed to parse forecast timestamp: {0}")]
    DateTimeError(String),
}
