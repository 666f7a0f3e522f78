//! Integration test support
//!
//! End-to-end tests run against the local backend in a scratch directory;
//! remote-backend behavior is covered by both implementations sharing the
//! repository contract.

pub mod fixtures;
pub mod helpers;
