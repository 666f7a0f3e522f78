//! Service context - dependency container for services
//!
//! Holds the pinned backend, the session store, and the outbound clients.
//! Built once at startup and cloned into whatever needs it.

use std::sync::Arc;

use portal_common::{hash_password, AppConfig, AppError, AppResult};
use portal_core::{Entity, Repository, SettingsRepository, VisitorLogRepository};
use portal_store::{LocalStore, SessionStore};

use crate::backend::Backend;
use crate::clients::{Drafter, GeoClient, TelegramNotifier};

/// Dependency container passed to all services
#[derive(Clone)]
pub struct ServiceContext {
    backend: Backend,
    session: SessionStore,

    // Outbound clients
    notifier: TelegramNotifier,
    geo: GeoClient,
    drafter: Drafter,

    // Bootstrap superuser; the plain password never outlives startup
    bootstrap_email: String,
    bootstrap_hash: String,
}

impl ServiceContext {
    /// Resolve the backend and wire up every dependency
    pub async fn new(config: &AppConfig) -> AppResult<Self> {
        let backend = Backend::resolve(config).await?;
        Self::with_backend(backend, config)
    }

    /// Wire dependencies onto an already-resolved backend (test harnesses)
    pub fn with_backend(backend: Backend, config: &AppConfig) -> AppResult<Self> {
        let client = reqwest::Client::new();
        let bootstrap_hash = hash_password(&config.bootstrap.password)?;

        // the session slot is always client-side, even with a remote backend
        let session_store = match &backend {
            Backend::Local(store) => store.clone(),
            Backend::Remote(_) => {
                LocalStore::open(&config.storage.data_dir).map_err(AppError::internal)?
            }
        };

        Ok(Self {
            backend,
            session: SessionStore::new(session_store),
            notifier: TelegramNotifier::new(client.clone(), &config.external.telegram_api_base),
            geo: GeoClient::new(client.clone(), &config.external.metadata_endpoint),
            drafter: Drafter::new(client, &config.external),
            bootstrap_email: config.bootstrap.email.clone(),
            bootstrap_hash,
        })
    }

    #[must_use]
    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Repository for any entity collection
    #[must_use]
    pub fn repository<E: Entity>(&self) -> Arc<dyn Repository<E>> {
        self.backend.repository::<E>()
    }

    #[must_use]
    pub fn visitor_repo(&self) -> Arc<dyn VisitorLogRepository> {
        self.backend.visitor_repo()
    }

    #[must_use]
    pub fn settings_repo(&self) -> Arc<dyn SettingsRepository> {
        self.backend.settings_repo()
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    #[must_use]
    pub fn notifier(&self) -> &TelegramNotifier {
        &self.notifier
    }

    #[must_use]
    pub fn geo(&self) -> &GeoClient {
        &self.geo
    }

    #[must_use]
    pub fn drafter(&self) -> &Drafter {
        &self.drafter
    }

    pub(crate) fn bootstrap_email(&self) -> &str {
        &self.bootstrap_email
    }

    pub(crate) fn bootstrap_hash(&self) -> &str {
        &self.bootstrap_hash
    }
}
