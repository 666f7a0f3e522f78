//! Content service
//!
//! Validated publishing for the public collections plus promotion of inbox
//! submissions into news and gallery. Every successful publish announces
//! itself through the notifier; delivery failures never fail the publish.

use tracing::{info, instrument, warn};

use portal_common::{AppError, AppResult};
use portal_core::{
    GalleryDraft, GalleryItem, InboxMessage, News, NewsDraft, RecordId, Suggestion,
    SuggestionDraft,
};
use validator::Validate;

use crate::clients::Notification;
use crate::dto::{CreateGalleryRequest, CreateNewsRequest, CreateSuggestionRequest};

use super::context::ServiceContext;

/// Longest title derived from an inbox message text
const INBOX_TITLE_MAX: usize = 50;

/// Cover image for promoted articles whose submission carried none
const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/seed/berita/800/600";

/// Content service
pub struct ContentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Publish a news article and announce it
    #[instrument(skip_all, fields(title = %request.title))]
    pub async fn publish_news(&self, request: CreateNewsRequest) -> AppResult<News> {
        request.validate().map_err(AppError::validation)?;

        let news = self
            .ctx
            .repository::<News>()
            .create(NewsDraft {
                title: request.title,
                content: request.content,
                author: request.author,
                image_url: request.image_url,
            })
            .await?;

        info!(id = %news.id, "news published");
        self.announce(Notification::Text(format!(
            "\u{1F4F0} <b>{}</b>\n\n{}",
            news.title,
            news.preview(200)
        )))
        .await;
        Ok(news)
    }

    /// Publish a gallery item and announce it
    #[instrument(skip_all, fields(title = %request.title))]
    pub async fn publish_gallery(&self, request: CreateGalleryRequest) -> AppResult<GalleryItem> {
        request.validate().map_err(AppError::validation)?;

        let item = self
            .ctx
            .repository::<GalleryItem>()
            .create(GalleryDraft {
                title: request.title,
                image_url: request.image_url,
                author: request.author,
            })
            .await?;

        info!(id = %item.id, "gallery item published");
        self.announce(Notification::Photo {
            image_url: item.image_url.clone(),
            caption: format!("\u{1F5BC} <b>{}</b>", item.title),
        })
        .await;
        Ok(item)
    }

    /// Store a suggestion from the public form
    #[instrument(skip_all)]
    pub async fn submit_suggestion(
        &self,
        request: CreateSuggestionRequest,
    ) -> AppResult<Suggestion> {
        request.validate().map_err(AppError::validation)?;

        let suggestion = self
            .ctx
            .repository::<Suggestion>()
            .create(SuggestionDraft {
                name: request.name,
                category: request.category,
                message: request.message,
            })
            .await?;

        info!(id = %suggestion.id, "suggestion stored");
        Ok(suggestion)
    }

    /// Promote an inbox submission to a news article, then drop it from
    /// the inbox. `title` overrides the one derived from the message text.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn promote_to_news(&self, id: RecordId, title: Option<String>) -> AppResult<News> {
        let item = self.inbox_item(id).await?;

        let mut draft = news_draft_from(&item);
        if let Some(title) = title.filter(|t| !t.trim().is_empty()) {
            draft.title = title;
        }
        let news = self.ctx.repository::<News>().create(draft).await?;

        self.ctx.repository::<InboxMessage>().delete(id).await?;
        info!(news_id = %news.id, "inbox item promoted to news");
        self.announce(Notification::Text(format!(
            "\u{1F4F0} <b>{}</b>\n\n{}",
            news.title,
            news.preview(200)
        )))
        .await;
        Ok(news)
    }

    /// Promote an inbox submission to a gallery item; requires an image
    #[instrument(skip_all, fields(id = %id))]
    pub async fn promote_to_gallery(&self, id: RecordId) -> AppResult<GalleryItem> {
        let item = self.inbox_item(id).await?;
        let draft = gallery_draft_from(&item)
            .ok_or_else(|| AppError::validation("Inbox item carries no image"))?;

        let gallery = self.ctx.repository::<GalleryItem>().create(draft).await?;

        self.ctx.repository::<InboxMessage>().delete(id).await?;
        info!(gallery_id = %gallery.id, "inbox item promoted to gallery");
        Ok(gallery)
    }

    /// Promote an inbox submission everywhere it fits: always to news,
    /// and to the gallery when it carries an image. Best-effort: a failed
    /// target is logged and the rest still proceed.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn publish_everywhere(&self, id: RecordId) -> AppResult<News> {
        let item = self.inbox_item(id).await?;

        let news = self
            .ctx
            .repository::<News>()
            .create(news_draft_from(&item))
            .await?;

        if let Some(draft) = gallery_draft_from(&item) {
            if let Err(e) = self.ctx.repository::<GalleryItem>().create(draft).await {
                warn!(error = %e, "gallery leg of publish-everywhere failed");
            }
        }

        self.ctx.repository::<InboxMessage>().delete(id).await?;
        info!(news_id = %news.id, "inbox item published everywhere");
        self.announce(Notification::Text(format!(
            "\u{1F4F0} <b>{}</b>\n\n{}",
            news.title,
            news.preview(200)
        )))
        .await;
        Ok(news)
    }

    /// Ask the drafting helper for a first article draft
    pub async fn draft_article(&self, topic: &str) -> String {
        self.ctx.drafter().draft(topic).await
    }

    async fn inbox_item(&self, id: RecordId) -> AppResult<InboxMessage> {
        let items = self.ctx.repository::<InboxMessage>().get_all().await?;
        items
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::NotFound("inbox item".to_string()))
    }

    /// Fetch credentials and send detached; a settings read failure only
    /// costs the announcement
    async fn announce(&self, note: Notification) {
        match self.ctx.settings_repo().get().await {
            Ok(settings) => self.ctx.notifier().send_detached(settings, note),
            Err(e) => warn!(error = %e, "could not load settings, announcement skipped"),
        }
    }
}

/// Title derived from the message text, truncated on a char boundary
fn derived_title(item: &InboxMessage) -> String {
    let trimmed = item.message_text.trim();
    if trimmed.is_empty() {
        return format!("Kiriman dari {}", item.sender_name);
    }
    trimmed.chars().take(INBOX_TITLE_MAX).collect()
}

fn news_draft_from(item: &InboxMessage) -> NewsDraft {
    NewsDraft {
        title: derived_title(item),
        content: item.message_text.clone(),
        author: item.sender_name.clone(),
        image_url: item
            .image_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
    }
}

fn gallery_draft_from(item: &InboxMessage) -> Option<GalleryDraft> {
    let image_url = item.image_url.clone().filter(|url| !url.trim().is_empty())?;
    Some(GalleryDraft {
        title: derived_title(item),
        image_url,
        author: Some(item.sender_name.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Backend;
    use portal_common::AppConfig;
    use portal_core::{Entity, InboxDraft};
    use portal_store::LocalStore;

    fn context(dir: &std::path::Path) -> ServiceContext {
        let config = AppConfig::for_tests(None, dir.to_string_lossy().into_owned());
        let store = LocalStore::open(dir).unwrap();
        ServiceContext::with_backend(Backend::Local(store), &config).unwrap()
    }

    async fn seed_inbox(ctx: &ServiceContext, text: &str, image: Option<&str>) -> InboxMessage {
        ctx.repository::<InboxMessage>()
            .create(InboxDraft {
                sender_name: "Budi".into(),
                message_text: text.into(),
                image_url: image.map(ToString::to_string),
                raw_payload: serde_json::json!({}),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_publish_news_rejects_empty_title() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        let content = ContentService::new(&ctx);

        let err = content
            .publish_news(CreateNewsRequest {
                title: String::new(),
                content: "body".into(),
                author: "Admin".into(),
                image_url: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_promote_to_news_removes_inbox_item() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        let content = ContentService::new(&ctx);

        let item = seed_inbox(&ctx, "Kegiatan pramuka berjalan lancar", None).await;
        let news = content.promote_to_news(item.id, None).await.unwrap();

        assert_eq!(news.title, "Kegiatan pramuka berjalan lancar");
        assert_eq!(news.author, "Budi");
        assert_eq!(news.image_url, PLACEHOLDER_IMAGE);
        let inbox = ctx.repository::<InboxMessage>().get_all().await.unwrap();
        assert!(inbox.is_empty());
    }

    #[tokio::test]
    async fn test_long_message_title_truncates_to_fifty_chars() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        let content = ContentService::new(&ctx);

        let long = "a".repeat(120);
        let item = seed_inbox(&ctx, &long, None).await;
        let news = content.promote_to_news(item.id, None).await.unwrap();

        assert_eq!(news.title.chars().count(), INBOX_TITLE_MAX);
        assert_eq!(news.content, long);
    }

    #[tokio::test]
    async fn test_promote_to_gallery_requires_image() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        let content = ContentService::new(&ctx);

        let item = seed_inbox(&ctx, "tanpa gambar", None).await;
        let err = content.promote_to_gallery(item.id).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        // the item stays in the inbox on a failed promotion
        let inbox = ctx.repository::<InboxMessage>().get_all().await.unwrap();
        assert_eq!(inbox.len(), 1);
    }

    #[tokio::test]
    async fn test_publish_everywhere_hits_news_and_gallery() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        let content = ContentService::new(&ctx);

        let item = seed_inbox(
            &ctx,
            "Foto upacara hari senin",
            Some("https://img.example/upacara.jpg"),
        )
        .await;
        content.publish_everywhere(item.id).await.unwrap();

        assert_eq!(ctx.repository::<News>().get_all().await.unwrap().len(), 1);
        let gallery = ctx.repository::<GalleryItem>().get_all().await.unwrap();
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery[0].author.as_deref(), Some("Budi"));
        assert!(ctx
            .repository::<InboxMessage>()
            .get_all()
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_missing_inbox_item_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        let content = ContentService::new(&ctx);

        let err = content
            .promote_to_news(RecordId::generate(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_suggestion_blank_name_stays_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(dir.path());
        let content = ContentService::new(&ctx);

        let suggestion = content
            .submit_suggestion(CreateSuggestionRequest {
                name: Some("   ".into()),
                category: "fasilitas".into(),
                message: "Tolong perbaiki kipas kelas".into(),
            })
            .await
            .unwrap();
        assert_eq!(suggestion.name, "anonymous");
    }

    #[test]
    fn test_inbox_status_starts_pending() {
        let item = InboxMessage::from_draft(
            RecordId::generate(),
            chrono::Utc::now(),
            InboxDraft {
                sender_name: "Budi".into(),
                message_text: "halo".into(),
                image_url: None,
                raw_payload: serde_json::json!({}),
            },
        );
        assert_eq!(item.status, "pending");
    }
}
