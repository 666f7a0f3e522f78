//! Fixture builders shared across integration tests

use chrono::{Duration, NaiveDate, Utc};

use portal_core::{
    NewsDraft, RecordId, SchoolEventDraft, StaffDraft, SuggestionDraft, VisitorLog,
};
use portal_store::{LocalStore, Table};

pub fn news_draft(title: &str) -> NewsDraft {
    NewsDraft {
        title: title.to_string(),
        content: format!("Isi artikel: {title}"),
        author: "Admin".to_string(),
        image_url: String::new(),
    }
}

pub fn staff_draft(name: &str) -> StaffDraft {
    StaffDraft {
        name: name.to_string(),
        position: "Guru".to_string(),
        image_url: String::new(),
        staff_number: None,
    }
}

pub fn event_draft(title: &str, date: NaiveDate) -> SchoolEventDraft {
    SchoolEventDraft {
        title: title.to_string(),
        date,
        time: "08:00".to_string(),
        location: "Aula".to_string(),
        description: String::new(),
    }
}

pub fn suggestion_draft(message: &str) -> SuggestionDraft {
    SuggestionDraft {
        name: None,
        category: "umum".to_string(),
        message: message.to_string(),
    }
}

/// Seed visitor logs with explicit ages, oldest first
pub fn seed_visits(store: &LocalStore, minutes_ago: &[i64]) {
    store
        .mutate::<VisitorLog, _>(|table: &mut Table<VisitorLog>| {
            for &minutes in minutes_ago {
                table.insert_front(VisitorLog {
                    id: RecordId::generate(),
                    visited_at: Utc::now() - Duration::minutes(minutes),
                    ip: "unknown".to_string(),
                    city: "Tembilahan".to_string(),
                    network: "unknown".to_string(),
                });
            }
            true
        })
        .expect("seeding visitor logs");
}
