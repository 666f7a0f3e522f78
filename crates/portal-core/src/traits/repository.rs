//! Repository traits (ports) - the uniform data-access interface
//!
//! Every entity type is served by the same four operations regardless of
//! which backend (remote database or local fallback store) is active. The
//! domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Backend transparency invariant: no caller can distinguish, from return
//! values alone, which backend served a call.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::entities::{SiteSettings, VisitorLog};
use crate::error::DomainError;
use crate::value_objects::RecordId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// A persistable domain entity.
///
/// Each entity names its collection, declares its draft (creation input)
/// and patch (partial update) shapes, and owns its presentation ordering.
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Collection (table) name, shared by both backends
    const COLLECTION: &'static str;

    /// Optional capacity applied by the fallback backend after each insert;
    /// the oldest records are evicted on overflow
    const CAPACITY: Option<usize> = None;

    /// Caller-supplied fields at creation time
    type Draft: Send + 'static;

    /// Partial update; `None` fields are left untouched
    type Patch: Send + 'static;

    fn id(&self) -> RecordId;

    fn created_at(&self) -> DateTime<Utc>;

    /// Build a full record from a synthesized id/timestamp and the draft
    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: Self::Draft) -> Self;

    /// Merge the given fields into the record
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Presentation order for `get_all`. Defaults to newest first.
    fn sort(records: &mut [Self]) {
        records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    }
}

/// Uniform repository operations for an entity type.
///
/// Semantics, identical on every backend:
/// - `get_all` returns the collection in the entity's documented order.
/// - `create` synthesizes the id and `created_at`, merges the draft,
///   persists, and returns the full record.
/// - `update` merges the patch into the existing record; a missing id is a
///   silent no-op, not an error.
/// - `delete` is idempotent; deleting a missing id succeeds.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    async fn get_all(&self) -> RepoResult<Vec<E>>;

    async fn create(&self, draft: E::Draft) -> RepoResult<E>;

    async fn update(&self, id: RecordId, patch: E::Patch) -> RepoResult<()>;

    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

/// Visitor log repository with the windowed count used by live metrics
#[async_trait]
pub trait VisitorLogRepository: Repository<VisitorLog> {
    /// Number of visits with `visited_at` strictly after `cutoff`
    async fn count_since(&self, cutoff: DateTime<Utc>) -> RepoResult<u64>;
}

/// Repository for the settings singleton (fixed key)
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Read the singleton, creating it with defaults if absent
    async fn get(&self) -> RepoResult<SiteSettings>;

    /// Replace the singleton (upsert by fixed key)
    async fn update(&self, settings: &SiteSettings) -> RepoResult<()>;
}
