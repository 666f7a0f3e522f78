//! Timing constants for polling, metrics, and outbound probes
//!
//! These used to be magic numbers scattered across views; the refresh
//! cadence and window sizes live here so every consumer agrees on them.

use std::time::Duration;

/// Chat room re-fetch cadence (near-real-time view)
pub const CHAT_REFRESH_INTERVAL: Duration = Duration::from_secs(3);

/// Admin dashboard re-fetch cadence
pub const DASHBOARD_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Trailing window for the online-visitor count
pub const ONLINE_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Bound on the client-metadata lookup performed on first visit;
/// on expiry the visit is logged with placeholder values
pub const METADATA_FETCH_TIMEOUT: Duration = Duration::from_secs(3);

/// Bound on the one-shot remote reachability probe at startup
pub const REMOTE_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
