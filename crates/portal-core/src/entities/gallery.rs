//! Gallery entity - a published photo

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Entity;
use crate::value_objects::RecordId;

/// Photo shown in the public gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: RecordId,
    pub title: String,
    pub image_url: String,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields when adding a gallery photo
#[derive(Debug, Clone)]
pub struct GalleryDraft {
    pub title: String,
    pub image_url: String,
    pub author: Option<String>,
}

/// Partial update for a gallery photo
#[derive(Debug, Clone, Default)]
pub struct GalleryPatch {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
}

impl Entity for GalleryItem {
    const COLLECTION: &'static str = "gallery";

    type Draft = GalleryDraft;
    type Patch = GalleryPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: GalleryDraft) -> Self {
        Self {
            id,
            title: draft.title,
            image_url: draft.image_url,
            author: draft.author,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: GalleryPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(author) = patch.author {
            self.author = Some(author);
        }
    }
}
