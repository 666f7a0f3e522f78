//! Settings singleton on the remote backend

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use portal_core::{RepoResult, SettingsRepository, SiteSettings, SETTINGS_KEY};

use super::error::{map_db_error, map_decode_error};

/// PostgreSQL implementation of [`SettingsRepository`]
///
/// The singleton lives under the fixed key; the first read writes the
/// defaults back so exactly one live instance exists from then on.
#[derive(Clone)]
pub struct PgSettingsRepository {
    pool: PgPool,
}

impl PgSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    #[instrument(skip_all)]
    async fn get(&self) -> RepoResult<SiteSettings> {
        let row: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT doc FROM settings WHERE key = $1")
                .bind(SETTINGS_KEY)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        match row {
            Some((doc,)) => {
                serde_json::from_value(doc).map_err(|e| map_decode_error("settings", e))
            }
            None => {
                let defaults = SiteSettings::default();
                self.update(&defaults).await?;
                Ok(defaults)
            }
        }
    }

    #[instrument(skip_all)]
    async fn update(&self, settings: &SiteSettings) -> RepoResult<()> {
        let doc = serde_json::to_value(settings).map_err(|e| map_decode_error("settings", e))?;

        sqlx::query(
            r"
            INSERT INTO settings (key, doc) VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET doc = EXCLUDED.doc
            ",
        )
        .bind(SETTINGS_KEY)
        .bind(doc)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
