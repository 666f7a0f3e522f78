//! In-memory collection shape: record arena plus insertion-order index
//!
//! Records are kept in a map keyed by id; a separate index remembers
//! insertion order, newest first. Ordering presented to callers is still
//! the entity's own (`Entity::sort`); the index exists so insertion order
//! survives the serialize/deserialize round trip and so capacity eviction
//! knows which records are oldest.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use portal_core::{Entity, RecordId};

/// One collection's records and their insertion order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table<E> {
    /// Record ids, newest insertion first
    order: Vec<RecordId>,
    /// Record arena keyed by id
    records: HashMap<RecordId, E>,
}

impl<E> Default for Table<E> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            records: HashMap::new(),
        }
    }
}

impl<E: Entity> Table<E> {
    /// Number of live records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clone records out in insertion order, newest first
    pub fn in_order(&self) -> Vec<E> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id).cloned())
            .collect()
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut E> {
        self.records.get_mut(&id)
    }

    /// Insert a new record at the front of the order index
    pub fn insert_front(&mut self, record: E) {
        let id = record.id();
        if self.records.insert(id, record).is_none() {
            self.order.insert(0, id);
        }
    }

    /// Remove a record; returns whether it was present
    pub fn remove(&mut self, id: RecordId) -> bool {
        if self.records.remove(&id).is_some() {
            self.order.retain(|existing| *existing != id);
            true
        } else {
            false
        }
    }

    /// Evict the oldest records until at most `capacity` remain
    pub fn evict_to(&mut self, capacity: usize) {
        while self.order.len() > capacity {
            if let Some(oldest) = self.order.pop() {
                self.records.remove(&oldest);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use portal_core::{VisitorDraft, VisitorLog};

    fn visit() -> VisitorLog {
        VisitorLog::from_draft(
            RecordId::generate(),
            Utc::now(),
            VisitorDraft {
                ip: "unknown".into(),
                city: "unknown".into(),
                network: "unknown".into(),
            },
        )
    }

    #[test]
    fn test_insert_front_orders_newest_first() {
        let mut table = Table::default();
        let first = visit();
        let second = visit();
        table.insert_front(first.clone());
        table.insert_front(second.clone());

        let ids: Vec<_> = table.in_order().iter().map(VisitorLog::id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut table = Table::default();
        let v = visit();
        table.insert_front(v.clone());

        assert!(table.remove(v.id));
        assert!(!table.remove(v.id));
        assert!(table.is_empty());
    }

    #[test]
    fn test_evict_drops_oldest() {
        let mut table = Table::default();
        let oldest = visit();
        table.insert_front(oldest.clone());
        for _ in 0..3 {
            table.insert_front(visit());
        }

        table.evict_to(3);
        assert_eq!(table.len(), 3);
        assert!(!table.in_order().iter().any(|v| v.id == oldest.id));
    }

    #[test]
    fn test_serde_round_trip_preserves_order() {
        let mut table = Table::default();
        for _ in 0..5 {
            table.insert_front(visit());
        }
        let ids: Vec<_> = table.in_order().iter().map(VisitorLog::id).collect();

        let json = serde_json::to_string(&table).unwrap();
        let back: Table<VisitorLog> = serde_json::from_str(&json).unwrap();
        let back_ids: Vec<_> = back.in_order().iter().map(VisitorLog::id).collect();
        assert_eq!(ids, back_ids);
    }
}
