//! Session state
//!
//! The current user is persisted to a named slot in the local store, so a
//! session opened before a restart is still there afterwards. Secrets never
//! appear here (only the public account fields). The once-per-session visit
//! flag is deliberately per-process: a restart is a fresh visit.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use portal_core::{RecordId, RepoResult, Role, User};

use crate::store::LocalStore;

/// Slot name holding the current session record
pub const SESSION_SLOT: &str = "session";

/// Public view of the logged-in account; never carries the password hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// `None` for the bootstrap admin, which has no stored record
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    pub fn bootstrap_admin(email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: "Administrator".to_string(),
            email: email.into(),
            role: Role::Admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: Some(user.id),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// Handle to the durable session slot; cheap to clone
#[derive(Clone)]
pub struct SessionStore {
    store: LocalStore,
    /// Set once the visit has been recorded for this process
    visit_logged: Arc<AtomicBool>,
}

impl SessionStore {
    pub fn new(store: LocalStore) -> Self {
        Self {
            store,
            visit_logged: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Persist the session record; it survives a process restart
    pub fn save(&self, user: &SessionUser) -> RepoResult<()> {
        self.store.write_slot(SESSION_SLOT, user)
    }

    /// Read the session record; absent or corrupt slots read as signed out
    pub fn current(&self) -> Option<SessionUser> {
        self.store.read_slot(SESSION_SLOT)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Clear the slot and the visit flag
    pub fn clear(&self) {
        self.store.remove_slot(SESSION_SLOT);
        self.visit_logged.store(false, Ordering::SeqCst);
    }

    /// Returns true exactly once per session; later calls see the flag set
    pub fn mark_visit_logged(&self) -> bool {
        self.visit_logged
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}
