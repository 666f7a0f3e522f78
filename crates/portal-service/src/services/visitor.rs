//! Visitor recording
//!
//! One log entry per session, written on the first page view. The whole
//! path is best-effort: metadata lookup degrades to placeholders and a
//! failed write only costs the log entry, never the page.

use tracing::{info, instrument, warn};

use super::context::ServiceContext;

/// Visitor service
pub struct VisitorService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VisitorService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record the visit once per session; later calls do nothing
    #[instrument(skip_all)]
    pub async fn record_visit(&self) {
        if !self.ctx.session().mark_visit_logged() {
            return;
        }

        let draft = self.ctx.geo().lookup().await;
        match self.ctx.visitor_repo().create(draft).await {
            Ok(log) => info!(id = %log.id, city = %log.city, "visit recorded"),
            Err(e) => warn!(error = %e, "visit not recorded"),
        }
    }
}
