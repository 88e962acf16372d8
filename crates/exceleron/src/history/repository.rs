//! History storage.

use indexmap::IndexMap;

use crate::error::{ExceleronError, Result};

use super::entry::{HistoryEntry, NewHistoryEntry};
use super::query::HistoryQuery;

/// Storage for upload history.
pub trait HistoryRepository {
    /// Store an entry and return it with its assigned id.
    fn create(&mut self, entry: NewHistoryEntry) -> Result<HistoryEntry>;

    /// Look up an entry by id.
    fn get(&self, id: u64) -> Option<&HistoryEntry>;

    /// Entries matching the query, in query order.
    fn list(&self, query: &HistoryQuery) -> Vec<&HistoryEntry>;

    /// Remove an entry and return it.
    fn delete(&mut self, id: u64) -> Result<HistoryEntry>;

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// History kept in process memory, in insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryHistory {
    entries: IndexMap<u64, HistoryEntry>,
    next_id: u64,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            next_id: 1,
        }
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryRepository for InMemoryHistory {
    fn create(&mut self, entry: NewHistoryEntry) -> Result<HistoryEntry> {
        let id = self.next_id;
        self.next_id += 1;

        let entry = HistoryEntry::from_new(id, entry);
        tracing::debug!(id, file = %entry.file_name, points = entry.data_points, "history entry created");
        self.entries.insert(id, entry.clone());
        Ok(entry)
    }

    fn get(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.get(&id)
    }

    fn list(&self, query: &HistoryQuery) -> Vec<&HistoryEntry> {
        // newest first before sorting, so stable sorts keep that as the tie order
        let mut entries: Vec<&HistoryEntry> = self
            .entries
            .values()
            .rev()
            .filter(|e| query.matches(e))
            .collect();
        entries.sort_by(|a, b| query.compare(a, b));
        entries
    }

    fn delete(&mut self, id: u64) -> Result<HistoryEntry> {
        self.entries
            .shift_remove(&id)
            .ok_or(ExceleronError::HistoryNotFound(id))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
