//! Live metrics
//!
//! The dashboard numbers degrade instead of erroring: a failed window
//! count shows the floor of one (somebody is looking at the page), failed
//! collection counts show zero. Refreshed by a poller on
//! [`DASHBOARD_REFRESH_INTERVAL`](portal_common::DASHBOARD_REFRESH_INTERVAL).

use chrono::Utc;
use tracing::{instrument, warn};

use portal_common::ONLINE_WINDOW;
use portal_core::{Entity, GalleryItem, InboxMessage, News, Suggestion};

use super::context::ServiceContext;

/// Counter snapshot for the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub online_now: u64,
    pub news_total: u64,
    pub gallery_total: u64,
    pub pending_suggestions: u64,
    pub pending_inbox: u64,
}

/// Metrics service
pub struct MetricsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MetricsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Visitors seen within [`ONLINE_WINDOW`], never below one
    #[instrument(skip_all)]
    pub async fn online_count(&self) -> u64 {
        let cutoff = Utc::now() - ONLINE_WINDOW;
        match self.ctx.visitor_repo().count_since(cutoff).await {
            Ok(count) => count.max(1),
            Err(e) => {
                warn!(error = %e, "online count unavailable, showing floor");
                1
            }
        }
    }

    /// All dashboard counters in one snapshot
    #[instrument(skip_all)]
    pub async fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            online_now: self.online_count().await,
            news_total: self.collection_count::<News>().await,
            gallery_total: self.collection_count::<GalleryItem>().await,
            pending_suggestions: self.collection_count::<Suggestion>().await,
            pending_inbox: self.collection_count::<InboxMessage>().await,
        }
    }

    /// Size of a collection, zero when the backend is unavailable
    async fn collection_count<E: Entity>(&self) -> u64 {
        match self.ctx.repository::<E>().get_all().await {
            Ok(records) => records.len() as u64,
            Err(e) => {
                warn!(collection = E::COLLECTION, error = %e, "count unavailable");
                0
            }
        }
    }
}
