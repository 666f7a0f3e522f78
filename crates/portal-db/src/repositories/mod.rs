//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! portal-core. One generic document repository serves every entity type;
//! the settings singleton and the visitor window count have dedicated code.

mod collection;
mod error;
mod settings;
mod visitor;

pub use collection::PgRepository;
pub use settings::PgSettingsRepository;
