//! Value objects - immutable domain primitives

mod record_id;

pub use record_id::{RecordId, RecordIdParseError};
