//! # portal-common
//!
//! Shared utilities including configuration, error handling, password
//! hashing, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, verify_password};
pub use config::{
    AppConfig, AppSettings, BootstrapConfig, ConfigError, DatabaseConfig, Environment,
    ExternalConfig, StorageConfig, CHAT_REFRESH_INTERVAL, DASHBOARD_REFRESH_INTERVAL,
    METADATA_FETCH_TIMEOUT, ONLINE_WINDOW, REMOTE_PROBE_TIMEOUT,
};
pub use error::{AppError, AppResult};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_for,
    TracingConfig, TracingError,
};
