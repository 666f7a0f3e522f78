//! School event (agenda) entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::Entity;
use crate::value_objects::RecordId;

/// A dated agenda item (exam week, ceremony, trip)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolEvent {
    pub id: RecordId,
    pub title: String,
    /// Day the event takes place; drives the agenda ordering
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl SchoolEvent {
    /// Check whether the event date has already passed
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date < today
    }
}

#[derive(Debug, Clone)]
pub struct SchoolEventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct SchoolEventPatch {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl Entity for SchoolEvent {
    const COLLECTION: &'static str = "events";

    type Draft = SchoolEventDraft;
    type Patch = SchoolEventPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: RecordId, created_at: DateTime<Utc>, draft: SchoolEventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            date: draft.date,
            time: draft.time,
            location: draft.location,
            description: draft.description,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: SchoolEventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }

    /// Agenda is presented soonest first
    fn sort(records: &mut [Self]) {
        records.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
    }
}
