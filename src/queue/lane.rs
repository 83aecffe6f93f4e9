//! Live entries of a single lane
//!
//! A lane owns the people currently waiting in it, indexed both by entry id
//! and by name, together with the lane's history ledger. Removal is
//! idempotent so that late or duplicated staff actions are harmless.

use crate::queue::identity::Name;
use crate::queue::ledger::HistoryLedger;
use crate::queue::types::{EntryId, LaneId, QueueEntry};
use std::collections::HashMap;

#[derive(Debug)]
pub struct Lane {
    id: LaneId,
    entries: HashMap<EntryId, QueueEntry>,
    by_name: HashMap<String, EntryId>,
    ledger: HistoryLedger,
}

impl Lane {
    pub fn new(id: LaneId) -> Self {
        Self {
            id,
            entries: HashMap::new(),
            by_name: HashMap::new(),
            ledger: HistoryLedger::new(),
        }
    }

    pub fn id(&self) -> LaneId {
        self.id
    }

    /// Add a validated name, stamping it with `now` and its completion count
    ///
    /// Callers must have passed the identity check first; a name that is
    /// already live here keeps its existing entry.
    pub fn enqueue(&mut self, entry_id: EntryId, name: Name, now: u64) -> EntryId {
        if let Some(existing) = self.by_name.get(name.as_str()) {
            log::warn!(
                "{} is already live in the {} lane as {}; enqueue ignored",
                name,
                self.id,
                existing
            );
            return *existing;
        }

        let prior_count = self.ledger.count_for(name.as_str());
        let name = name.into_string();
        self.by_name.insert(name.clone(), entry_id);
        self.entries.insert(
            entry_id,
            QueueEntry {
                id: entry_id,
                name,
                prior_count,
                enqueue_time: now,
            },
        );
        entry_id
    }

    /// Withdraw an entry without recording history
    ///
    /// Returns the removed entry, or `None` if it was already gone.
    pub fn cancel(&mut self, entry_id: EntryId) -> Option<QueueEntry> {
        self.remove(entry_id)
    }

    /// Complete an entry and append it to the ledger
    ///
    /// Returns the removed entry, or `None` if it was already gone.
    pub fn confirm(&mut self, entry_id: EntryId) -> Option<QueueEntry> {
        let entry = self.remove(entry_id)?;
        self.ledger.append(&entry.name, entry.prior_count);
        Some(entry)
    }

    fn remove(&mut self, entry_id: EntryId) -> Option<QueueEntry> {
        let entry = self.entries.remove(&entry_id)?;
        self.by_name.remove(&entry.name);
        Some(entry)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn entry_id_for(&self, name: &str) -> Option<EntryId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, entry_id: EntryId) -> Option<&QueueEntry> {
        self.entries.get(&entry_id)
    }

    /// Live entries in no particular order
    pub fn entries(&self) -> impl Iterator<Item = &QueueEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }
}
