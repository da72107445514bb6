// Config tests mutate process environment variables, so they are
// serialized with serial_test.

use serial_test::serial;
use weather_dashboard_service::config::Config;

const ALL_VARS: [&str; 5] = [
    "OPENWEATHER_API_KEY",
    "SERVER_HOST",
    "SERVER_PORT",
    "WEATHER_URL",
    "FORECAST_URL",
];

fn clear_env() {
    for var in ALL_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_missing_api_key_is_fatal() {
    clear_env();
    assert!(Config::from_env().is_err());
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    std::env::set_var("OPENWEATHER_API_KEY", "test-key");

    let config = Config::from_env().expect("config should load");
    assert_eq!(config.api_key, "test-key");
    assert_eq!(config.server_addr(), "0.0.0.0:8080");
    assert_eq!(
        config.weather_url,
        "https://api.openweathermap.org/data/2.5/weather"
    );
    assert_eq!(
        config.forecast_url,
        "https://api.openweathermap.org/data/2.5/forecast"
    );
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    std::env::set_var("OPENWEATHER_API_KEY", "test-key");
    std::env::set_var("SERVER_HOST", "127.0.0.1");
    std::env::set_var("SERVER_PORT", "9090");
    std::env::set_var("WEATHER_URL", "http://localhost:1234/weather");
    std::env::set_var("FORECAST_URL", "http://localhost:1234/forecast");

    let config = Config::from_env().expect("config should load");
    assert_eq!(config.server_addr(), "127.0.0.1:9090");
    assert_eq!(config.weather_url, "http://localhost:1234/weather");
    assert_eq!(config.forecast_url, "http://localhost:1234/forecast");

    clear_env();
}

#[test]
#[serial]
fn test_from_env_bad_port_falls_back_to_default() {
    clear_env();
    std::env::set_var("OPENWEATHER_API_KEY", "test-key");
    std::env::set_var("SERVER_PORT", "not-a-port");

    let config = Config::from_env().expect("config should load");
    assert_eq!(config.server_port, 8080);

    clear_env();
}
