//! Visitor log entity - coarse per-visit metadata
//!
//! Append-only. The fallback backend keeps only the most recent
//! [`VisitorLog::CAPACITY`] entries, evicting the oldest on overflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Entity;
use crate::value_objects::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorLog {
    pub id: RecordId,
    pub visited_at: DateTime<Utc>,
    /// Coarse client metadata; placeholders when the lookup fails
    pub ip: String,
    pub city: String,
    pub network: String,
}

#[derive(Debug, Clone)]
pub struct VisitorDraft {
    pub ip: String,
    pub city: String,
    pub network: String,
}

impl Entity for VisitorLog {
    const COLLECTION: &'static str = "visitors";
    const CAPACITY: Option<usize> = Some(100);

    type Draft = VisitorDraft;
    /// Append-only; `update` is a documented no-op
    type Patch = ();

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.visited_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: VisitorDraft) -> Self {
        Self {
            id,
            visited_at: created_at,
            ip: draft.ip,
            city: draft.city,
            network: draft.network,
        }
    }

    fn apply_patch(&mut self, (): ()) {}
}
