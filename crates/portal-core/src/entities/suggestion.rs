//! Suggestion entity - feedback sent from the public site
//!
//! Suggestions have an append-then-delete lifecycle: they are never edited,
//! only created by a visitor and removed by an admin.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Entity;
use crate::value_objects::RecordId;

/// Default submitter label when the visitor leaves the name blank
const ANONYMOUS: &str = "anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields; a missing name defaults to "anonymous"
#[derive(Debug, Clone)]
pub struct SuggestionDraft {
    pub name: Option<String>,
    pub category: String,
    pub message: String,
}

impl Entity for Suggestion {
    const COLLECTION: &'static str = "suggestions";

    type Draft = SuggestionDraft;
    /// Immutable once created; `update` is a documented no-op
    type Patch = ();

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: SuggestionDraft) -> Self {
        let name = draft
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS.to_string());
        Self {
            id,
            name,
            category: draft.category,
            message: draft.message,
            created_at,
        }
    }

    fn apply_patch(&mut self, (): ()) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_defaults_to_anonymous() {
        let s = Suggestion::from_draft(
            RecordId::generate(),
            Utc::now(),
            SuggestionDraft {
                name: Some("   ".into()),
                category: "facilities".into(),
                message: "More benches please".into(),
            },
        );
        assert_eq!(s.name, "anonymous");
    }

    #[test]
    fn test_given_name_is_kept() {
        let s = Suggestion::from_draft(
            RecordId::generate(),
            Utc::now(),
            SuggestionDraft {
                name: Some("Rina".into()),
                category: "canteen".into(),
                message: "Longer lunch break".into(),
            },
        );
        assert_eq!(s.name, "Rina");
    }
}
