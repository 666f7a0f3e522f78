//! Article drafting helper
//!
//! Asks the generative-text API for a first draft of a news article on a
//! topic. No key configured, or any request failure, yields canned
//! placeholder text so the editor still gets something to start from.

use serde_json::json;
use tracing::debug;

use portal_common::ExternalConfig;

const PLACEHOLDER_DRAFT: &str = "Konten tidak dapat dibuat secara otomatis saat ini. \
     Silakan tulis draf artikel secara manual.";

#[derive(Clone)]
pub struct Drafter {
    client: reqwest::Client,
    api_key: Option<String>,
    endpoint: String,
}

impl Drafter {
    pub fn new(client: reqwest::Client, external: &ExternalConfig) -> Self {
        Self {
            client,
            api_key: external.genai_api_key.clone(),
            endpoint: external.genai_endpoint.clone(),
        }
    }

    /// Draft an article body for a topic; never fails
    pub async fn draft(&self, topic: &str) -> String {
        let Some(key) = self.api_key.as_deref() else {
            debug!("no drafting key configured, returning placeholder");
            return PLACEHOLDER_DRAFT.to_string();
        };

        match self.request(key, topic).await {
            Ok(text) => text,
            Err(e) => {
                debug!(error = %e, "drafting request failed, returning placeholder");
                PLACEHOLDER_DRAFT.to_string()
            }
        }
    }

    async fn request(&self, key: &str, topic: &str) -> Result<String, reqwest::Error> {
        let prompt = format!(
            "Tuliskan draf artikel berita sekolah dalam Bahasa Indonesia tentang: {topic}"
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response: serde_json::Value = self
            .client
            .post(&self.endpoint)
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map_or_else(|| PLACEHOLDER_DRAFT.to_string(), ToString::to_string))
    }
}
