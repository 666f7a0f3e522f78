//! News entity - a published news article

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Entity;
use crate::value_objects::RecordId;

/// News article shown on the public site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl News {
    /// Get a truncated preview of the article body (for listings)
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.content[..end]
        }
    }
}

/// Caller-supplied fields when creating a news article
#[derive(Debug, Clone)]
pub struct NewsDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub image_url: String,
}

/// Partial update for a news article
#[derive(Debug, Clone, Default)]
pub struct NewsPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
}

impl Entity for News {
    const COLLECTION: &'static str = "news";

    type Draft = NewsDraft;
    type Patch = NewsPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: NewsDraft) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            image_url: draft.image_url,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: NewsPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
    }
}
