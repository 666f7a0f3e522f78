//! Site settings - the singleton configuration record
//!
//! Exactly one live instance exists at all times; the first read creates it
//! with defaults. Stored under a fixed key rather than a generated id.

use serde::{Deserialize, Serialize};

/// Fixed storage key for the settings singleton
pub const SETTINGS_KEY: &str = "site";

/// Display text, hero image, and messaging-bot credentials for the site
///
/// The bot token is an API credential that must be replayed verbatim to the
/// messaging endpoint, so unlike user secrets it is stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub school_name: String,
    pub running_text: String,
    pub hero_image_url: String,
    pub sub_welcome_text: String,
    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
}

impl SiteSettings {
    /// Both credentials must be present for the dispatcher to send anything
    pub fn has_bot_credentials(&self) -> bool {
        let token_set = self
            .telegram_bot_token
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        let chat_set = self
            .telegram_chat_id
            .as_deref()
            .is_some_and(|c| !c.trim().is_empty());
        token_set && chat_set
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            school_name: "SMKN 2 Tembilahan".to_string(),
            running_text: "Selamat Datang di Portal Resmi SMKN 2 Tembilahan".to_string(),
            hero_image_url: String::new(),
            sub_welcome_text: String::new(),
            telegram_bot_token: None,
            telegram_chat_id: None,
        }
    }
}
