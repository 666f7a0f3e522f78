//! Configuration loading

mod app_config;
mod intervals;

pub use app_config::{
    AppConfig, AppSettings, BootstrapConfig, ConfigError, DatabaseConfig, Environment,
    ExternalConfig, StorageConfig,
};
pub use intervals::{
    CHAT_REFRESH_INTERVAL, DASHBOARD_REFRESH_INTERVAL, METADATA_FETCH_TIMEOUT, ONLINE_WINDOW,
    REMOTE_PROBE_TIMEOUT,
};
