//! # portal-service
//!
//! Application layer: picks the storage backend once at startup, wires the
//! repositories and outbound clients into a [`ServiceContext`], and exposes
//! the use-case services on top of it. Background refresh runs through
//! [`sync::Poller`].

pub mod backend;
pub mod clients;
pub mod dto;
pub mod services;
pub mod sync;

// Re-export commonly used types
pub use backend::Backend;
pub use clients::{Drafter, GeoClient, TelegramNotifier};
pub use services::{
    AuthService, ChatService, ContentService, DashboardStats, MetricsService, ServiceContext,
    VisitorService,
};
pub use sync::Poller;
