pub mod api;
pub mod config;
pub mod fetch_error;
pub mod fetcher;
pub mod forecast;
pub mod presenter;
pub mod services;
