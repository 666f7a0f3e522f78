//! Schema bootstrap
//!
//! Document tables are created on demand at startup so a freshly
//! provisioned database works without a migration step.

use portal_core::{
    Achievement, ChatMessage, Club, Department, Entity, GalleryItem, InboxMessage, News,
    SchoolEvent, StaffMember, Suggestion, User, VisitorLog,
};
use sqlx::PgPool;
use tracing::debug;

/// Every document collection served by [`crate::PgRepository`]
pub const COLLECTIONS: &[&str] = &[
    News::COLLECTION,
    GalleryItem::COLLECTION,
    StaffMember::COLLECTION,
    Department::COLLECTION,
    Club::COLLECTION,
    SchoolEvent::COLLECTION,
    Achievement::COLLECTION,
    Suggestion::COLLECTION,
    VisitorLog::COLLECTION,
    InboxMessage::COLLECTION,
    User::COLLECTION,
    ChatMessage::COLLECTION,
];

/// Create all document tables and the settings table if they do not exist
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for collection in COLLECTIONS {
        let ddl = format!(
            r"
            CREATE TABLE IF NOT EXISTS {collection} (
                id         UUID PRIMARY KEY,
                created_at TIMESTAMPTZ NOT NULL,
                doc        JSONB NOT NULL
            )
            ",
        );
        sqlx::query(&ddl).execute(pool).await?;
        debug!(collection, "ensured document table");
    }

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            doc JSONB NOT NULL
        )
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_names_are_unique() {
        let mut names = COLLECTIONS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COLLECTIONS.len());
    }

    #[test]
    fn test_collection_names_are_sql_safe() {
        // Interpolated into DDL/DML, so they must stay plain identifiers
        for name in COLLECTIONS {
            assert!(name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }
}
