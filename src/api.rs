use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use crate::fetch_error::FetchError;
use crate::presenter::Dashboard;
use crate::services::WeatherService;

const DASHBOARD_PAGE: &str = include_str!("../assets/dashboard.html");
const CITY_NOT_FOUND_MESSAGE: &str = "City not found. Please check spelling and try again.";

#[derive(Clone)]
pub struct AppState {
    pub weather_service: WeatherService,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: String,
}

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/weather", get(get_weather))
        .with_state(state);

    Router::new()
        .route("/", get(dashboard_page))
        .nest("/api/v1", api_routes)
}

/// The static dashboard shell; everything it renders comes from
/// `/api/v1/weather`.
async fn dashboard_page() -> impl IntoResponse {
    Html(DASHBOARD_PAGE)
}

#[instrument(skip(_state))]
async fn health(State(_state): State<AppState>) -> impl IntoResponse {
    debug!("Health check requested");
    let response = HealthResponse {
        status: "healthy".to_string(),
    };
    (StatusCode::OK, Json(response))
}

#[instrument(skip(state), fields(city = %params.city))]
async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherQuery>,
) -> Result<Json<Dashboard>, (StatusCode, Json<ErrorResponse>)> {
    let city = params.city.trim();
    if city.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "A city name is required.",
        ));
    }

    debug!("Fetching dashboard for city {}", city);
    let dashboard = state
        .weather_service
        .get_dashboard(city)
        .await
        .map_err(|e| match e {
            FetchError::CityNotFound(_) => {
                warn!("City '{}' not found upstream", city);
                error_response(StatusCode::NOT_FOUND, CITY_NOT_FOUND_MESSAGE)
            }
            other => {
                error!("Failed to build dashboard for '{}': {}", city, other);
                error_response(
                    StatusCode::BAD_GATEWAY,
                    "Weather service is unavailable. Please try again later.",
                )
            }
        })?;

    info!(
        "Built dashboard for {} with {} daily summaries",
        dashboard.current.city_name,
        dashboard.daily.len()
    );

    Ok(Json(dashboard))
}

fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
