//! Repository implementations over the local file store

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::instrument;

use portal_core::{
    Entity, RecordId, RepoResult, Repository, SettingsRepository, SiteSettings, VisitorLog,
    VisitorLogRepository, SETTINGS_KEY,
};

use crate::store::LocalStore;

/// File-backed repository for a single collection
pub struct LocalRepository<E> {
    store: LocalStore,
    _marker: PhantomData<fn() -> E>,
}

impl<E> LocalRepository<E> {
    pub fn new(store: LocalStore) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }
}

impl<E> Clone for LocalRepository<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for LocalRepository<E> {
    #[instrument(skip_all, fields(collection = E::COLLECTION))]
    async fn get_all(&self) -> RepoResult<Vec<E>> {
        let mut records = self.store.read::<E>().in_order();
        E::sort(&mut records);
        Ok(records)
    }

    #[instrument(skip_all, fields(collection = E::COLLECTION))]
    async fn create(&self, draft: E::Draft) -> RepoResult<E> {
        let record = E::from_draft(RecordId::generate(), Utc::now(), draft);
        let stored = record.clone();
        self.store.mutate::<E, _>(move |table| {
            table.insert_front(stored);
            if let Some(capacity) = E::CAPACITY {
                table.evict_to(capacity);
            }
            true
        })?;
        Ok(record)
    }

    #[instrument(skip_all, fields(collection = E::COLLECTION, id = %id))]
    async fn update(&self, id: RecordId, patch: E::Patch) -> RepoResult<()> {
        // Missing ids are a silent no-op, matching the remote backend
        self.store.mutate::<E, _>(move |table| match table.get_mut(id) {
            Some(record) => {
                record.apply_patch(patch);
                true
            }
            None => false,
        })?;
        Ok(())
    }

    #[instrument(skip_all, fields(collection = E::COLLECTION, id = %id))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        self.store.mutate::<E, _>(move |table| table.remove(id))?;
        Ok(())
    }
}

#[async_trait]
impl VisitorLogRepository for LocalRepository<VisitorLog> {
    async fn count_since(&self, cutoff: DateTime<Utc>) -> RepoResult<u64> {
        let table = self.store.read::<VisitorLog>();
        let count = table
            .in_order()
            .iter()
            .filter(|log| log.visited_at > cutoff)
            .count();
        Ok(count as u64)
    }
}

/// File-backed site settings, stored in a named slot
#[derive(Clone)]
pub struct LocalSettingsRepository {
    store: LocalStore,
}

impl LocalSettingsRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SettingsRepository for LocalSettingsRepository {
    #[instrument(skip_all)]
    async fn get(&self) -> RepoResult<SiteSettings> {
        match self.store.read_slot::<SiteSettings>(SETTINGS_KEY) {
            Some(settings) => Ok(settings),
            None => {
                // First read seeds the slot so later writes have a base row
                let defaults = SiteSettings::default();
                self.update(&defaults).await?;
                Ok(defaults)
            }
        }
    }

    #[instrument(skip_all)]
    async fn update(&self, settings: &SiteSettings) -> RepoResult<()> {
        self.store.write_slot(SETTINGS_KEY, settings)
    }
}
