//! Chat message entity
//!
//! Immutable once created; messages can only be appended and deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Entity;
use crate::value_objects::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: RecordId,
    pub author_id: RecordId,
    pub author_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Check if the message body is effectively empty
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ChatMessageDraft {
    pub author_id: RecordId,
    pub author_name: String,
    pub text: String,
}

impl Entity for ChatMessage {
    const COLLECTION: &'static str = "chat_messages";

    type Draft = ChatMessageDraft;
    /// Immutable once created; `update` is a documented no-op
    type Patch = ();

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: ChatMessageDraft) -> Self {
        Self {
            id,
            author_id: draft.author_id,
            author_name: draft.author_name,
            text: draft.text,
            created_at,
        }
    }

    fn apply_patch(&mut self, (): ()) {}
}
