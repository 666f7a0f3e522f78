//! Outbound HTTP clients
//!
//! All three share one `reqwest::Client` owned by the service context.
//! Failures here never block a publish or a visit: the notifier logs and
//! moves on, the metadata lookup degrades to placeholders, and the drafter
//! degrades to canned text.

mod drafter;
mod geo;
mod telegram;

pub use drafter::Drafter;
pub use geo::GeoClient;
pub use telegram::{Notification, TelegramNotifier};
