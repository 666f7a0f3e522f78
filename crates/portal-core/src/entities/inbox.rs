//! Inbox entity - a message received from the messaging bot
//!
//! Inbox items are created by the external bot webhook, optionally
//! promoted into one or more published content records by an admin, then
//! deleted. Promotion is one-way and untracked: the resulting content
//! records carry no reference back to the inbox item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Entity;
use crate::value_objects::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxMessage {
    pub id: RecordId,
    pub sender_name: String,
    pub message_text: String,
    pub image_url: Option<String>,
    /// Raw payload as received from the bot, kept for troubleshooting
    pub raw_payload: serde_json::Value,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl InboxMessage {
    /// Check whether the item carries an image usable for the gallery
    #[inline]
    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct InboxDraft {
    pub sender_name: String,
    pub message_text: String,
    pub image_url: Option<String>,
    pub raw_payload: serde_json::Value,
}

#[derive(Debug, Clone, Default)]
pub struct InboxPatch {
    pub status: Option<String>,
}

impl Entity for InboxMessage {
    const COLLECTION: &'static str = "inbox";

    type Draft = InboxDraft;
    type Patch = InboxPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: InboxDraft) -> Self {
        Self {
            id,
            sender_name: draft.sender_name,
            message_text: draft.message_text,
            image_url: draft.image_url,
            raw_payload: draft.raw_payload,
            status: "pending".to_string(),
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: InboxPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}
