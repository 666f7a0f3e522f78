//! Achievement entity - a competition result

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Entity;
use crate::value_objects::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: RecordId,
    pub title: String,
    pub rank: String,
    pub category: String,
    pub year: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AchievementDraft {
    pub title: String,
    pub rank: String,
    pub category: String,
    pub year: String,
}

#[derive(Debug, Clone, Default)]
pub struct AchievementPatch {
    pub title: Option<String>,
    pub rank: Option<String>,
    pub category: Option<String>,
    pub year: Option<String>,
}

impl Entity for Achievement {
    const COLLECTION: &'static str = "achievements";

    type Draft = AchievementDraft;
    type Patch = AchievementPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: AchievementDraft) -> Self {
        Self {
            id,
            title: draft.title,
            rank: draft.rank,
            category: draft.category,
            year: draft.year,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: AchievementPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(rank) = patch.rank {
            self.rank = rank;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
    }
}
