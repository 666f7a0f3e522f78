//! Application configuration structs
//!
//! Loads configuration from environment variables (with `.env` support).
//! The remote database URL is optional by design: when it is absent the
//! process runs against the local fallback store for its whole lifetime.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub bootstrap: BootstrapConfig,
    pub external: ExternalConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Remote database configuration
///
/// `url == None` means "no remote configured"; the backend selector then
/// pins the local store without probing anything.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Local fallback store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per collection plus the session slot
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

/// Bootstrap superuser credential
///
/// Checked before the user collection on login; exists outside it. The
/// password arrives as plain text from the environment and is argon2-hashed
/// once at startup, never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapConfig {
    #[serde(default = "default_bootstrap_email")]
    pub email: String,
    pub password: String,
}

/// External collaborator endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalConfig {
    /// Base URL of the messaging-bot API
    #[serde(default = "default_telegram_api_base")]
    pub telegram_api_base: String,
    /// Endpoint returning coarse client/network metadata
    #[serde(default = "default_metadata_endpoint")]
    pub metadata_endpoint: String,
    /// Generative-text API key; absence disables drafting (placeholder only)
    pub genai_api_key: Option<String>,
    #[serde(default = "default_genai_endpoint")]
    pub genai_endpoint: String,
}

// Default value functions
fn default_app_name() -> String {
    "school-portal".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_bootstrap_email() -> String {
    "admin@smkn2.sch.id".to_string()
}

fn default_telegram_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_metadata_endpoint() -> String {
    "https://ipapi.co/json/".to_string()
}

fn default_genai_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        .to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            storage: StorageConfig {
                data_dir: env::var("PORTAL_DATA_DIR").unwrap_or_else(|_| default_data_dir()),
            },
            bootstrap: BootstrapConfig {
                email: env::var("PORTAL_ADMIN_EMAIL")
                    .unwrap_or_else(|_| default_bootstrap_email()),
                password: env::var("PORTAL_ADMIN_PASSWORD")
                    .map_err(|_| ConfigError::MissingVar("PORTAL_ADMIN_PASSWORD"))?,
            },
            external: ExternalConfig {
                telegram_api_base: env::var("TELEGRAM_API_BASE")
                    .unwrap_or_else(|_| default_telegram_api_base()),
                metadata_endpoint: env::var("METADATA_ENDPOINT")
                    .unwrap_or_else(|_| default_metadata_endpoint()),
                genai_api_key: env::var("GENAI_API_KEY").ok().filter(|s| !s.is_empty()),
                genai_endpoint: env::var("GENAI_ENDPOINT")
                    .unwrap_or_else(|_| default_genai_endpoint()),
            },
        })
    }

    /// Check whether a remote store is configured at all
    #[must_use]
    pub fn has_remote(&self) -> bool {
        self.database.url.is_some()
    }

    /// Build a config without touching the environment (test harnesses)
    #[must_use]
    pub fn for_tests(database_url: Option<String>, data_dir: String) -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::Development,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections: default_max_connections(),
                min_connections: default_min_connections(),
            },
            storage: StorageConfig { data_dir },
            bootstrap: BootstrapConfig {
                email: default_bootstrap_email(),
                password: "test-admin-password".to_string(),
            },
            external: ExternalConfig {
                telegram_api_base: default_telegram_api_base(),
                metadata_endpoint: default_metadata_endpoint(),
                genai_api_key: None,
                genai_endpoint: default_genai_endpoint(),
            },
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
