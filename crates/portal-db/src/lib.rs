//! # portal-db
//!
//! Remote backend implementing the repository traits with PostgreSQL via
//! SQLx.
//!
//! ## Overview
//!
//! Every collection is one document table with the same shape:
//!
//! ```sql
//! CREATE TABLE <collection> (
//!     id         UUID PRIMARY KEY,
//!     created_at TIMESTAMPTZ NOT NULL,
//!     doc        JSONB NOT NULL
//! );
//! ```
//!
//! A single generic [`PgRepository`] serves all entity types; the entity
//! supplies its collection name and its presentation ordering. The settings
//! singleton lives in its own fixed-key table served by
//! [`PgSettingsRepository`].

pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgRepository, PgSettingsRepository};
pub use schema::ensure_schema;
