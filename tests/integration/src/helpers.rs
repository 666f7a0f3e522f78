//! Test helpers for integration tests
//!
//! Spins up a fully wired service context over the local backend in a
//! scratch directory that lives as long as the harness value.

use anyhow::Result;
use tempfile::TempDir;

use portal_common::AppConfig;
use portal_service::{AuthService, Backend, ServiceContext};
use portal_service::dto::LoginRequest;
use portal_store::{LocalStore, SessionUser};

/// Password the harness configures for the bootstrap admin
pub const ADMIN_PASSWORD: &str = "test-admin-password";

/// A portal instance backed by a scratch data directory
pub struct TestPortal {
    pub ctx: ServiceContext,
    pub store: LocalStore,
    pub config: AppConfig,
    _dir: TempDir,
}

impl TestPortal {
    /// Start a portal pinned to the local backend
    pub fn start() -> Result<Self> {
        let dir = TempDir::new()?;
        let mut config = AppConfig::for_tests(None, dir.path().to_string_lossy().into_owned());
        // dead endpoint keeps the suite hermetic: outbound lookups fail
        // fast and exercise the placeholder path
        config.external.metadata_endpoint = "http://127.0.0.1:1/json".to_string();
        let _ = portal_common::try_init_tracing_for(config.app.env);
        let store = LocalStore::open(dir.path())?;
        let ctx = ServiceContext::with_backend(Backend::Local(store.clone()), &config)?;
        Ok(Self {
            ctx,
            store,
            config,
            _dir: dir,
        })
    }

    /// A second context over the same data directory, as after a restart
    pub fn reopen(&self) -> Result<ServiceContext> {
        let ctx = ServiceContext::with_backend(Backend::Local(self.store.clone()), &self.config)?;
        Ok(ctx)
    }

    /// Sign in as the bootstrap admin
    pub async fn login_admin(&self) -> Result<SessionUser> {
        let auth = AuthService::new(&self.ctx);
        let user = auth
            .login(LoginRequest {
                email: self.config.bootstrap.email.clone(),
                password: ADMIN_PASSWORD.to_string(),
            })
            .await?;
        Ok(user)
    }
}
