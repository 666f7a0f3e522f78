//! Domain entities
//!
//! One record type per public-site collection, each with its draft
//! (creation input) and patch (partial update) companion types.

mod achievement;
mod chat;
mod directory;
mod event;
mod gallery;
mod inbox;
mod news;
mod settings;
mod suggestion;
mod user;
mod visitor;

pub use achievement::{Achievement, AchievementDraft, AchievementPatch};
pub use chat::{ChatMessage, ChatMessageDraft};
pub use directory::{
    Club, ClubDraft, ClubPatch, Department, DepartmentDraft, DepartmentPatch, StaffDraft,
    StaffMember, StaffPatch,
};
pub use event::{SchoolEvent, SchoolEventDraft, SchoolEventPatch};
pub use gallery::{GalleryDraft, GalleryItem, GalleryPatch};
pub use inbox::{InboxDraft, InboxMessage, InboxPatch};
pub use news::{News, NewsDraft, NewsPatch};
pub use settings::{SiteSettings, SETTINGS_KEY};
pub use suggestion::{Suggestion, SuggestionDraft};
pub use user::{generate_member_code, Role, User, UserDraft, UserPatch};
pub use visitor::{VisitorDraft, VisitorLog};
