//! Filtering and ordering for history listings.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::entry::{HistoryEntry, HistoryStatus};

/// Sort order for history listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistorySort {
    /// Newest first.
    #[default]
    Date,
    /// File name, ascending.
    Name,
    /// Most data points first.
    Size,
}

impl std::str::FromStr for HistorySort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(HistorySort::Date),
            "name" => Ok(HistorySort::Name),
            "size" => Ok(HistorySort::Size),
            _ => Err(format!("Unknown sort: {}. Use date, name, or size.", s)),
        }
    }
}

/// Which history entries to list and in what order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryQuery {
    /// Case-insensitive substring of the file name.
    pub search: Option<String>,
    /// Only entries with this status; `None` means all.
    pub status: Option<HistoryStatus>,
    pub sort: HistorySort,
}

impl HistoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the status filter.
    pub fn with_status(mut self, status: HistoryStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: HistorySort) -> Self {
        self.sort = sort;
        self
    }

    /// Check whether an entry passes the search and status filters.
    pub fn matches(&self, entry: &HistoryEntry) -> bool {
        let matches_search = match &self.search {
            Some(term) => entry
                .file_name
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        };
        let matches_status = self.status.is_none_or(|s| s == entry.status);
        matches_search && matches_status
    }

    /// Order two entries according to the sort setting.
    pub fn compare(&self, a: &HistoryEntry, b: &HistoryEntry) -> Ordering {
        match self.sort {
            // ids break timestamp ties so the later upload still comes first
            HistorySort::Date => b
                .uploaded_at
                .cmp(&a.uploaded_at)
                .then_with(|| b.id.cmp(&a.id)),
            HistorySort::Name => a
                .file_name
                .to_lowercase()
                .cmp(&b.file_name.to_lowercase())
                .then_with(|| a.file_name.cmp(&b.file_name)),
            HistorySort::Size => b.data_points.cmp(&a.data_points),
        }
    }
}
