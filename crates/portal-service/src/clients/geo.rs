//! Client metadata lookup
//!
//! Fetches coarse visitor metadata (ip, city, network) from the configured
//! endpoint. The lookup is bounded by [`METADATA_FETCH_TIMEOUT`]; on any
//! failure the visit is logged with placeholder values instead.

use serde::Deserialize;
use tracing::debug;

use portal_common::METADATA_FETCH_TIMEOUT;
use portal_core::VisitorDraft;

const PLACEHOLDER: &str = "unknown";

#[derive(Debug, Deserialize)]
struct MetadataResponse {
    ip: Option<String>,
    city: Option<String>,
    /// Network / carrier name (`org` upstream)
    org: Option<String>,
}

#[derive(Clone)]
pub struct GeoClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GeoClient {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Look up metadata for the current client; never fails
    pub async fn lookup(&self) -> VisitorDraft {
        match tokio::time::timeout(METADATA_FETCH_TIMEOUT, self.fetch()).await {
            Ok(Ok(meta)) => VisitorDraft {
                ip: meta.ip.unwrap_or_else(|| PLACEHOLDER.to_string()),
                city: meta.city.unwrap_or_else(|| PLACEHOLDER.to_string()),
                network: meta.org.unwrap_or_else(|| PLACEHOLDER.to_string()),
            },
            Ok(Err(e)) => {
                debug!(error = %e, "metadata lookup failed, using placeholders");
                Self::placeholders()
            }
            Err(_) => {
                debug!("metadata lookup timed out, using placeholders");
                Self::placeholders()
            }
        }
    }

    async fn fetch(&self) -> Result<MetadataResponse, reqwest::Error> {
        self.client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    fn placeholders() -> VisitorDraft {
        VisitorDraft {
            ip: PLACEHOLDER.to_string(),
            city: PLACEHOLDER.to_string(),
            network: PLACEHOLDER.to_string(),
        }
    }
}
