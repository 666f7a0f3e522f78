//! The local store - durable JSON files, one per collection

mod local_store;
mod table;

pub use local_store::LocalStore;
pub use table::Table;
