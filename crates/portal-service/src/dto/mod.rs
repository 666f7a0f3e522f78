//! Data transfer objects for the use-case services
//!
//! Request DTOs carry caller input with declarative validation; services
//! validate before touching a repository.

pub mod requests;

// Re-export commonly used request types
pub use requests::{
    CreateGalleryRequest, CreateNewsRequest, CreateSuggestionRequest, LoginRequest,
    RegisterRequest, SendMessageRequest,
};
