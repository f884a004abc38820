pub mod app;
pub mod components;
pub mod config;
pub mod query_builder;

pub use app::{app, AppProps};
pub use config::{app_dir, get_app_data, Config, ConfigError};
