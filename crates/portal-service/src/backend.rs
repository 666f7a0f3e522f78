//! Backend selection
//!
//! The storage backend is decided exactly once, at startup, and pinned for
//! the process lifetime. No remote URL configured means the local store is
//! used without probing; a configured remote that fails its reachability
//! probe (or exceeds the probe timeout) also falls back to the local store.
//! Callers never learn which backend serves them beyond [`Backend::is_remote`].

use std::sync::Arc;

use tracing::{info, warn};

use portal_common::{AppConfig, AppError, AppResult, REMOTE_PROBE_TIMEOUT};
use portal_core::{Entity, Repository, SettingsRepository, VisitorLog, VisitorLogRepository};
use portal_db::{ensure_schema, pool, PgPool, PgRepository, PgSettingsRepository};
use portal_store::{LocalRepository, LocalSettingsRepository, LocalStore};

/// The pinned storage backend
#[derive(Clone)]
pub enum Backend {
    Remote(PgPool),
    Local(LocalStore),
}

impl Backend {
    /// Decide the backend for this process
    ///
    /// Probes the remote (connect, ping, schema bootstrap) under
    /// [`REMOTE_PROBE_TIMEOUT`]; any failure falls back to the local store.
    pub async fn resolve(config: &AppConfig) -> AppResult<Self> {
        if let Some(url) = &config.database.url {
            match tokio::time::timeout(REMOTE_PROBE_TIMEOUT, probe_remote(url, config)).await {
                Ok(Ok(pool)) => {
                    info!("remote backend reachable, pinned for process lifetime");
                    return Ok(Self::Remote(pool));
                }
                Ok(Err(e)) => {
                    warn!(error = %e, "remote backend unreachable, falling back to local store");
                }
                Err(_) => {
                    warn!(
                        timeout = ?REMOTE_PROBE_TIMEOUT,
                        "remote probe timed out, falling back to local store"
                    );
                }
            }
        } else {
            info!("no remote configured, using local store");
        }

        let store = LocalStore::open(&config.storage.data_dir).map_err(AppError::internal)?;
        Ok(Self::Local(store))
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Repository for any entity collection, backend-transparent
    #[must_use]
    pub fn repository<E: Entity>(&self) -> Arc<dyn Repository<E>> {
        match self {
            Self::Remote(pool) => Arc::new(PgRepository::<E>::new(pool.clone())),
            Self::Local(store) => Arc::new(LocalRepository::<E>::new(store.clone())),
        }
    }

    /// Visitor repository with the windowed count extension
    #[must_use]
    pub fn visitor_repo(&self) -> Arc<dyn VisitorLogRepository> {
        match self {
            Self::Remote(pool) => Arc::new(PgRepository::<VisitorLog>::new(pool.clone())),
            Self::Local(store) => Arc::new(LocalRepository::<VisitorLog>::new(store.clone())),
        }
    }

    /// The settings singleton
    #[must_use]
    pub fn settings_repo(&self) -> Arc<dyn SettingsRepository> {
        match self {
            Self::Remote(db) => Arc::new(PgSettingsRepository::new(db.clone())),
            Self::Local(store) => Arc::new(LocalSettingsRepository::new(store.clone())),
        }
    }
}

async fn probe_remote(url: &str, config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    let mut db_config = portal_db::DatabaseConfig::new(url);
    db_config.max_connections = config.database.max_connections;
    db_config.min_connections = config.database.min_connections;

    let db = portal_db::create_pool(&db_config).await?;
    pool::ping(&db).await?;
    ensure_schema(&db).await?;
    Ok(db)
}
