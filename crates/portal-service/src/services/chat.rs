//! Chat service
//!
//! Posting requires an open session; the room view is refreshed by a
//! poller on [`CHAT_REFRESH_INTERVAL`](portal_common::CHAT_REFRESH_INTERVAL).

use tracing::{info, instrument};

use portal_common::{AppError, AppResult};
use portal_core::{ChatMessage, ChatMessageDraft, RecordId};
use validator::Validate;

use crate::dto::SendMessageRequest;

use super::context::ServiceContext;

/// Chat service
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a message as the signed-in user
    #[instrument(skip_all)]
    pub async fn send(&self, request: SendMessageRequest) -> AppResult<ChatMessage> {
        request.validate().map_err(AppError::validation)?;
        if request.text.trim().is_empty() {
            return Err(AppError::validation("Message must not be blank"));
        }

        let user = self
            .ctx
            .session()
            .current()
            .ok_or(AppError::NotAuthenticated)?;

        let message = self
            .ctx
            .repository::<ChatMessage>()
            .create(ChatMessageDraft {
                // the bootstrap admin has no stored record, so its
                // messages get a fresh author id per message
                author_id: user.id.unwrap_or_else(RecordId::generate),
                author_name: user.name,
                text: request.text,
            })
            .await?;

        info!(id = %message.id, "chat message posted");
        Ok(message)
    }

    /// Newest-first room history
    pub async fn list(&self) -> AppResult<Vec<ChatMessage>> {
        Ok(self.ctx.repository::<ChatMessage>().get_all().await?)
    }

    /// Moderation delete; removing an already-gone message is fine
    #[instrument(skip_all, fields(id = %id))]
    pub async fn delete(&self, id: RecordId) -> AppResult<()> {
        self.ctx.repository::<ChatMessage>().delete(id).await?;
        Ok(())
    }
}
