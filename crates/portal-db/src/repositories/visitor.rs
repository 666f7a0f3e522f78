//! Windowed visitor count on the remote backend
//!
//! The only filtered query the remote store needs: count rows newer than a
//! cutoff. Used by the live-metrics online count.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;
use tracing::instrument;

use portal_core::{Entity, RepoResult, VisitorLog, VisitorLogRepository};

use super::collection::PgRepository;
use super::error::map_db_error;

#[async_trait]
impl VisitorLogRepository for PgRepository<VisitorLog> {
    #[instrument(skip_all, fields(%cutoff))]
    async fn count_since(&self, cutoff: DateTime<Utc>) -> RepoResult<u64> {
        let query = format!(
            "SELECT COUNT(*) AS n FROM {} WHERE created_at > $1",
            VisitorLog::COLLECTION
        );
        let row = sqlx::query(&query)
            .bind(cutoff)
            .fetch_one(self.pool())
            .await
            .map_err(map_db_error)?;

        let n: i64 = row.try_get("n").map_err(map_db_error)?;
        Ok(n.max(0) as u64)
    }
}
