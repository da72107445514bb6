// Tests for WeatherFetcher against a mocked OpenWeatherMap
// Uses mockito for HTTP mocking

use mockito::{Matcher, Server, ServerGuard};
use weather_dashboard_service::fetch_error::FetchError;
use weather_dashboard_service::fetcher::WeatherFetcher;

const CURRENT_BODY: &str = r#"{
    "name": "London",
    "sys": {"country": "GB"},
    "main": {"temp": 18.4, "humidity": 72},
    "wind": {"speed": 3.6},
    "weather": [{"description": "broken clouds"}]
}"#;

const FORECAST_BODY: &str = r#"{
    "list": [
        {"dt_txt": "2025-06-01 12:00:00",
         "main": {"temp": 20.0, "temp_min": 18.5, "temp_max": 21.2}},
        {"dt_txt": "2025-06-01 15:00:00",
         "main": {"temp": 22.0, "temp_min": 19.0, "temp_max": 23.0}}
    ]
}"#;

fn create_test_fetcher(server: &ServerGuard) -> WeatherFetcher {
    WeatherFetcher::new(
        format!("{}/weather", server.url()),
        format!("{}/forecast", server.url()),
        "test-key".to_string(),
    )
}

fn query_matcher(city: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("q".into(), city.into()),
        Matcher::UrlEncoded("appid".into(), "test-key".into()),
        Matcher::UrlEncoded("units".into(), "metric".into()),
    ])
}

#[tokio::test]
async fn test_fetch_success() {
    let mut server = Server::new_async().await;

    let current_mock = server
        .mock("GET", "/weather")
        .match_query(query_matcher("London"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CURRENT_BODY)
        .create_async()
        .await;

    let forecast_mock = server
        .mock("GET", "/forecast")
        .match_query(query_matcher("London"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(FORECAST_BODY)
        .create_async()
        .await;

    let fetcher = create_test_fetcher(&server);
    let (current, forecast) = fetcher.fetch("London").await.expect("fetch should succeed");

    assert_eq!(current.name, "London");
    assert_eq!(current.main.temp, 18.4);
    assert_eq!(forecast.list.len(), 2);
    assert!(forecast.alerts.is_empty());

    current_mock.assert_async().await;
    forecast_mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_current_not_found() {
    let mut server = Server::new_async().await;

    let current_mock = server
        .mock("GET", "/weather")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"cod":"404","message":"city not found"}"#)
        .create_async()
        .await;

    let fetcher = create_test_fetcher(&server);
    let result = fetcher.fetch("Nowhereville").await;

    match result.unwrap_err() {
        FetchError::CityNotFound(city) => assert_eq!(city, "Nowhereville"),
        other => panic!("Expected CityNotFound, got {other:?}"),
    }

    current_mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_forecast_not_found_fails_whole_query() {
    let mut server = Server::new_async().await;

    // Current succeeds, forecast does not: the query as a whole fails
    server
        .mock("GET", "/weather")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CURRENT_BODY)
        .create_async()
        .await;

    let forecast_mock = server
        .mock("GET", "/forecast")
        .match_query(Matcher::Any)
        .with_status(502)
        .create_async()
        .await;

    let fetcher = create_test_fetcher(&server);
    let result = fetcher.fetch("London").await;

    assert!(matches!(result, Err(FetchError::CityNotFound(_))));
    forecast_mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_malformed_body_is_request_error() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/weather")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name": "London"}"#)
        .create_async()
        .await;

    let fetcher = create_test_fetcher(&server);
    let result = fetcher.fetch_current("London").await;

    assert!(matches!(result, Err(FetchError::Request(_))));
}

#[tokio::test]
async fn test_fetch_forecast_with_alerts() {
    let mut server = Server::new_async().await;

    let body = r#"{
        "list": [
            {"dt_txt": "2025-06-01 12:00:00",
             "main": {"temp": 35.0, "temp_min": 33.0, "temp_max": 37.0}}
        ],
        "alerts": [
            {"event": "Heat Advisory", "description": "Stay hydrated"}
        ]
    }"#;

    server
        .mock("GET", "/forecast")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let fetcher = create_test_fetcher(&server);
    let forecast = fetcher
        .fetch_forecast("Phoenix")
        .await
        .expect("fetch should succeed");

    assert_eq!(forecast.alerts.len(), 1);
    assert_eq!(forecast.alerts[0].event, "Heat Advisory");
}
