//! Directory entities - staff members, departments, and clubs
//!
//! Directory-style collections are presented in ascending display-name
//! order rather than by recency.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Entity;
use crate::value_objects::RecordId;

/// Sort helper shared by the directory entities
fn sort_by_name<E: Entity>(records: &mut [E], name: impl Fn(&E) -> String) {
    records.sort_by_key(name);
}

// ============================================================================
// Staff member
// ============================================================================

/// A teacher or staff member in the public directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: RecordId,
    pub name: String,
    pub position: String,
    pub image_url: String,
    /// Official staff number, when assigned
    pub staff_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct StaffDraft {
    pub name: String,
    pub position: String,
    pub image_url: String,
    pub staff_number: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StaffPatch {
    pub name: Option<String>,
    pub position: Option<String>,
    pub image_url: Option<String>,
    pub staff_number: Option<String>,
}

impl Entity for StaffMember {
    const COLLECTION: &'static str = "staff";

    type Draft = StaffDraft;
    type Patch = StaffPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: StaffDraft) -> Self {
        Self {
            id,
            name: draft.name,
            position: draft.position,
            image_url: draft.image_url,
            staff_number: draft.staff_number,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: StaffPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(staff_number) = patch.staff_number {
            self.staff_number = Some(staff_number);
        }
    }

    fn sort(records: &mut [Self]) {
        sort_by_name(records, |s| s.name.clone());
    }
}

// ============================================================================
// Department
// ============================================================================

/// A study program / department
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DepartmentDraft {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default)]
pub struct DepartmentPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
}

impl Entity for Department {
    const COLLECTION: &'static str = "departments";

    type Draft = DepartmentDraft;
    type Patch = DepartmentPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: DepartmentDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            icon: draft.icon,
            image_url: draft.image_url,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: DepartmentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
    }

    fn sort(records: &mut [Self]) {
        sort_by_name(records, |d| d.name.clone());
    }
}

// ============================================================================
// Club
// ============================================================================

/// An extracurricular club
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: RecordId,
    pub name: String,
    pub image_url: String,
    pub schedule: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ClubDraft {
    pub name: String,
    pub image_url: String,
    pub schedule: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct ClubPatch {
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub schedule: Option<String>,
    pub description: Option<String>,
}

impl Entity for Club {
    const COLLECTION: &'static str = "clubs";

    type Draft = ClubDraft;
    type Patch = ClubPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: ClubDraft) -> Self {
        Self {
            id,
            name: draft.name,
            image_url: draft.image_url,
            schedule: draft.schedule,
            description: draft.description,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: ClubPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(schedule) = patch.schedule {
            self.schedule = schedule;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }

    fn sort(records: &mut [Self]) {
        sort_by_name(records, |c| c.name.clone());
    }
}
