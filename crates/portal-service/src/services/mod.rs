//! Use-case services
//!
//! Each service borrows the shared [`ServiceContext`] and implements one
//! slice of behavior on top of the pinned backend.

pub mod auth;
pub mod chat;
pub mod content;
mod context;
pub mod metrics;
pub mod visitor;

pub use auth::{AuthService, Registration};
pub use chat::ChatService;
pub use content::ContentService;
pub use context::ServiceContext;
pub use metrics::{DashboardStats, MetricsService};
pub use visitor::VisitorService;
