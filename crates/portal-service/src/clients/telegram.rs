//! Messaging-bot notifier
//!
//! Sends publish announcements to the configured channel. Credentials live
//! in the site settings record, not the process environment, so they are
//! re-read per send and a site with no credentials simply skips sending.

use serde_json::json;
use tracing::{debug, warn};

use portal_common::{AppError, AppResult};
use portal_core::SiteSettings;

/// What to announce
#[derive(Debug, Clone)]
pub enum Notification {
    /// `sendMessage` with HTML formatting
    Text(String),
    /// `sendPhoto` with an HTML caption
    Photo { image_url: String, caption: String },
}

/// Client for the bot HTTP API
#[derive(Clone)]
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_base: String,
}

impl TelegramNotifier {
    pub fn new(client: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    /// Send a notification, skipping silently when credentials are absent
    pub async fn send(&self, settings: &SiteSettings, note: Notification) -> AppResult<()> {
        if !settings.has_bot_credentials() {
            debug!("bot credentials not configured, skipping notification");
            return Ok(());
        }
        // has_bot_credentials guarantees both are present and non-blank
        let (Some(token), Some(chat_id)) = (
            settings.telegram_bot_token.as_deref(),
            settings.telegram_chat_id.as_deref(),
        ) else {
            return Ok(());
        };

        let (method, body) = match note {
            Notification::Text(text) => (
                "sendMessage",
                json!({
                    "chat_id": chat_id,
                    "text": text,
                    "parse_mode": "HTML",
                }),
            ),
            Notification::Photo { image_url, caption } => (
                "sendPhoto",
                json!({
                    "chat_id": chat_id,
                    "photo": image_url,
                    "caption": caption,
                    "parse_mode": "HTML",
                }),
            ),
        };

        let url = format!("{}/bot{token}/{method}", self.api_base);
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("bot API: {e}")))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AppError::ExternalService(format!(
                "bot API returned {} for {method}",
                response.status()
            )))
        }
    }

    /// Fire-and-forget variant used after a publish; failures are logged
    pub fn send_detached(&self, settings: SiteSettings, note: Notification) {
        let notifier = self.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.send(&settings, note).await {
                warn!(error = %e, "notification delivery failed");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_credentials_skip_without_error() {
        let notifier = TelegramNotifier::new(reqwest::Client::new(), "http://127.0.0.1:1");
        let settings = SiteSettings::default();
        // no credentials, so no request is attempted against the dead endpoint
        notifier
            .send(&settings, Notification::Text("hello".into()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_surfaces_external_error() {
        let notifier = TelegramNotifier::new(reqwest::Client::new(), "http://127.0.0.1:1");
        let settings = SiteSettings {
            telegram_bot_token: Some("123:abc".into()),
            telegram_chat_id: Some("@school_news".into()),
            ..Default::default()
        };
        let err = notifier
            .send(&settings, Notification::Text("hello".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ExternalService(_)));
    }
}
