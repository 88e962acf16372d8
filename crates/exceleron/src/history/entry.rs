//! History records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chart::ChartStyle;
use crate::extract::ChartDataset;

/// Processing state of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryStatus {
    #[default]
    Completed,
    Processing,
    Failed,
}

impl HistoryStatus {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            HistoryStatus::Completed => "completed",
            HistoryStatus::Processing => "processing",
            HistoryStatus::Failed => "failed",
        }
    }
}

impl std::str::FromStr for HistoryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(HistoryStatus::Completed),
            "processing" => Ok(HistoryStatus::Processing),
            "failed" => Ok(HistoryStatus::Failed),
            _ => Err(format!(
                "Unknown status: {}. Use completed, processing, or failed.",
                s
            )),
        }
    }
}

/// An entry to be stored; the repository assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewHistoryEntry {
    pub file_name: String,
    pub chart_type: ChartStyle,
    pub status: HistoryStatus,
    pub dataset: ChartDataset,
}

impl NewHistoryEntry {
    /// A completed upload shown as a bar chart, named after its source file.
    pub fn completed(dataset: ChartDataset) -> Self {
        Self {
            file_name: dataset.metadata.source_file_name.clone(),
            chart_type: ChartStyle::Bar,
            status: HistoryStatus::Completed,
            dataset,
        }
    }
}

/// A stored upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    /// Number of points in the dataset.
    pub data_points: usize,
    pub chart_type: ChartStyle,
    pub status: HistoryStatus,
    pub dataset: ChartDataset,
}

impl HistoryEntry {
    pub(crate) fn from_new(id: u64, new: NewHistoryEntry) -> Self {
        Self {
            id,
            file_name: new.file_name,
            uploaded_at: Utc::now(),
            data_points: new.dataset.len(),
            chart_type: new.chart_type,
            status: new.status,
            dataset: new.dataset,
        }
    }
}

/// Usage counters shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub files_uploaded: u64,
    pub charts_created: u64,
    pub last_activity: DateTime<Utc>,
}

impl UserStats {
    pub fn new() -> Self {
        Self {
            files_uploaded: 0,
            charts_created: 0,
            last_activity: Utc::now(),
        }
    }

    /// Record activity without changing counters.
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }
}

impl Default for UserStats {
    fn default() -> Self {
        Self::new()
    }
}
