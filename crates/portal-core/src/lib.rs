//! # portal-core
//!
//! Domain layer containing entities, the record id value object, and the
//! repository traits every backend implements. This crate has zero
//! dependencies on infrastructure (database, local store, HTTP clients).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Achievement, AchievementDraft, AchievementPatch, ChatMessage, ChatMessageDraft, Club,
    ClubDraft, ClubPatch, Department, DepartmentDraft, DepartmentPatch, GalleryItem, GalleryDraft,
    GalleryPatch, InboxMessage, InboxDraft, InboxPatch, News, NewsDraft, NewsPatch, Role,
    SchoolEvent, SchoolEventDraft, SchoolEventPatch, SiteSettings, StaffMember, StaffDraft,
    StaffPatch, Suggestion, SuggestionDraft, User, UserDraft, UserPatch, VisitorDraft, VisitorLog,
    generate_member_code, SETTINGS_KEY,
};
pub use error::DomainError;
pub use traits::{Entity, RepoResult, Repository, SettingsRepository, VisitorLogRepository};
pub use value_objects::{RecordId, RecordIdParseError};
