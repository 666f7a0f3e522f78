//! Generic PostgreSQL document repository
//!
//! One implementation serves every entity type: records live as JSONB
//! documents keyed by id, and presentation ordering is applied by the
//! entity itself after the fetch. The remote surface stays down to four
//! operations per table: select-all, insert-one, update-by-id,
//! delete-by-id.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;

use portal_core::{Entity, RecordId, RepoResult, Repository};

use super::error::{map_db_error, map_decode_error};

/// PostgreSQL implementation of [`Repository`] for any entity type
pub struct PgRepository<E> {
    pool: PgPool,
    _marker: PhantomData<fn() -> E>,
}

impl<E> PgRepository<E> {
    /// Create a repository bound to the entity's collection table
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }
}

impl<E> Clone for PgRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E: Entity> PgRepository<E> {
    /// Fetch a single document by id, if present
    pub(crate) async fn fetch_doc(&self, id: RecordId) -> RepoResult<Option<E>> {
        let query = format!("SELECT doc FROM {} WHERE id = $1", E::COLLECTION);
        let row: Option<(serde_json::Value,)> = sqlx::query_as(&query)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(|(doc,)| serde_json::from_value(doc))
            .transpose()
            .map_err(|e| map_decode_error(E::COLLECTION, e))
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for PgRepository<E> {
    #[instrument(skip_all, fields(collection = E::COLLECTION))]
    async fn get_all(&self) -> RepoResult<Vec<E>> {
        let query = format!("SELECT doc FROM {}", E::COLLECTION);
        let rows: Vec<(serde_json::Value,)> = sqlx::query_as(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut records = rows
            .into_iter()
            .map(|(doc,)| serde_json::from_value(doc))
            .collect::<Result<Vec<E>, _>>()
            .map_err(|e| map_decode_error(E::COLLECTION, e))?;

        E::sort(&mut records);
        Ok(records)
    }

    #[instrument(skip_all, fields(collection = E::COLLECTION))]
    async fn create(&self, draft: E::Draft) -> RepoResult<E> {
        let record = E::from_draft(RecordId::generate(), Utc::now(), draft);
        let doc = serde_json::to_value(&record).map_err(|e| map_decode_error(E::COLLECTION, e))?;

        let query = format!(
            "INSERT INTO {} (id, created_at, doc) VALUES ($1, $2, $3)",
            E::COLLECTION
        );
        sqlx::query(&query)
            .bind(record.id().into_inner())
            .bind(record.created_at())
            .bind(doc)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(record)
    }

    /// Merge the patch into the stored document. A missing id is a silent
    /// no-op by contract, not an error.
    #[instrument(skip_all, fields(collection = E::COLLECTION, %id))]
    async fn update(&self, id: RecordId, patch: E::Patch) -> RepoResult<()> {
        let Some(mut record) = self.fetch_doc(id).await? else {
            return Ok(());
        };
        record.apply_patch(patch);

        let doc = serde_json::to_value(&record).map_err(|e| map_decode_error(E::COLLECTION, e))?;
        let query = format!("UPDATE {} SET doc = $2 WHERE id = $1", E::COLLECTION);
        sqlx::query(&query)
            .bind(id.into_inner())
            .bind(doc)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    /// Idempotent: deleting a missing id succeeds
    #[instrument(skip_all, fields(collection = E::COLLECTION, %id))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let query = format!("DELETE FROM {} WHERE id = $1", E::COLLECTION);
        sqlx::query(&query)
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
