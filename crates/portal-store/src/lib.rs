//! # portal-store
//!
//! Local fallback backend: durable per-collection JSON files used whenever
//! no remote store is configured or reachable at startup.
//!
//! ## Model
//!
//! Each collection is one file holding an id-keyed record arena plus a
//! separately maintained insertion-order index (newest first). Reads of an
//! absent or corrupt file yield an empty collection, never an error. Every
//! write replaces the whole collection file (temp file + rename).
//!
//! ## Known limitation
//!
//! Writes from the same process are serialized by an in-process lock, but
//! two *processes* sharing a data directory race on the whole-file replace
//! and one writer's effect can be lost. Accepted and documented, not
//! silently patched over.

pub mod repositories;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use repositories::{LocalRepository, LocalSettingsRepository};
pub use session::{SessionStore, SessionUser, SESSION_SLOT};
pub use store::{LocalStore, Table};
