use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use weather_dashboard_service::api::{create_router, AppState};
use weather_dashboard_service::config::Config;
use weather_dashboard_service::fetcher::WeatherFetcher;
use weather_dashboard_service::services::WeatherService;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with environment filter support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,weather_dashboard_service=debug")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration; a missing credential halts before anything is served
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(
                "API key not found. Set the OPENWEATHER_API_KEY environment variable. ({})",
                e
            );
            return Err(e.into());
        }
    };
    info!("Starting weather dashboard service on {}", config.server_addr());

    // Wire fetcher -> service -> router
    let fetcher = WeatherFetcher::new(
        config.weather_url.clone(),
        config.forecast_url.clone(),
        config.api_key.clone(),
    );
    let weather_service = WeatherService::new(fetcher);

    let app_state = AppState { weather_service };
    let app = create_router(app_state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
