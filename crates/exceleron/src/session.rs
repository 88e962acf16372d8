//! The upload, chart and insight flow of a single user.
//!
//! A [`Session`] holds the dataset currently on screen, its chart mode and
//! insights, plus upload history and usage counters. Every operation either
//! replaces the current view wholesale or leaves it untouched on error.

use serde::Serialize;

use crate::chart::ChartMode;
use crate::error::{ExceleronError, Result};
use crate::extract::{ChartDataset, ColumnSelection, ExtractionConfig, Extractor};
use crate::history::{
    HistoryEntry, HistoryQuery, HistoryRepository, InMemoryHistory, NewHistoryEntry, UserStats,
};
use crate::input::RawTable;
use crate::insight::{Insight, InsightConfig, InsightEngine};

/// What the dashboard is currently showing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentView {
    pub dataset: ChartDataset,
    pub mode: ChartMode,
    pub insights: Vec<Insight>,
}

/// Session state for one user.
pub struct Session<R: HistoryRepository = InMemoryHistory> {
    extractor: Extractor,
    engine: InsightEngine,
    history: R,
    stats: UserStats,
    current: Option<CurrentView>,
}

impl Session<InMemoryHistory> {
    /// Create a session with in-memory history and default configuration.
    pub fn new() -> Self {
        Self::with_repository(InMemoryHistory::new())
    }
}

impl Default for Session<InMemoryHistory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: HistoryRepository> Session<R> {
    /// Create a session backed by the given history repository.
    pub fn with_repository(history: R) -> Self {
        Self {
            extractor: Extractor::new(),
            engine: InsightEngine::new(),
            history,
            stats: UserStats::new(),
            current: None,
        }
    }

    /// Set extraction configuration.
    pub fn with_extraction(mut self, config: ExtractionConfig) -> Self {
        self.extractor = Extractor::with_config(config);
        self
    }

    /// Set insight configuration.
    pub fn with_insight(mut self, config: InsightConfig) -> Self {
        self.engine = InsightEngine::with_config(config);
        self
    }

    /// Extract a dataset from an uploaded table and make it current.
    ///
    /// The chart mode resets to a 2D bar chart, insights are regenerated and
    /// the upload is added to history.
    pub fn process(
        &mut self,
        table: &RawTable,
        selection: &ColumnSelection,
        source_name: &str,
    ) -> Result<&CurrentView> {
        let dataset = self.extractor.extract(table, selection, source_name)?;
        let view = self.build_view(dataset, ChartMode::default())?;
        let entry = self.history.create(NewHistoryEntry::completed(view.dataset.clone()))?;

        tracing::info!(
            history_id = entry.id,
            file = %entry.file_name,
            points = entry.data_points,
            "processed upload"
        );

        self.stats.files_uploaded += 1;
        self.stats.charts_created += 1;
        self.stats.touch();
        Ok(self.current.insert(view))
    }

    /// Switch the chart mode of the current dataset.
    pub fn change_chart_mode(&mut self, mode: ChartMode) -> Result<&CurrentView> {
        let dataset = self
            .current
            .as_ref()
            .map(|v| v.dataset.clone())
            .ok_or(ExceleronError::NoActiveDataset)?;
        let view = self.build_view(dataset, mode)?;

        self.stats.charts_created += 1;
        self.stats.touch();
        Ok(self.current.insert(view))
    }

    /// Show a dataset from history again, as a 2D bar chart.
    pub fn reload(&mut self, id: u64) -> Result<&CurrentView> {
        let dataset = self
            .history
            .get(id)
            .map(|e| e.dataset.clone())
            .ok_or(ExceleronError::HistoryNotFound(id))?;
        let view = self.build_view(dataset, ChartMode::default())?;

        self.stats.touch();
        Ok(self.current.insert(view))
    }

    /// Remove an upload from history.
    ///
    /// If the current view shows the same file it is cleared.
    pub fn delete(&mut self, id: u64) -> Result<HistoryEntry> {
        let entry = self.history.delete(id)?;

        let showing_deleted = self
            .current
            .as_ref()
            .is_some_and(|v| v.dataset.metadata.source_file_name == entry.file_name);
        if showing_deleted {
            tracing::debug!(file = %entry.file_name, "cleared current view");
            self.current = None;
        }

        self.stats.files_uploaded = self.stats.files_uploaded.saturating_sub(1);
        self.stats.touch();
        Ok(entry)
    }

    /// The current view, if any.
    pub fn current(&self) -> Option<&CurrentView> {
        self.current.as_ref()
    }

    /// Insights for the current view; empty when nothing is loaded.
    pub fn insights(&self) -> &[Insight] {
        self.current.as_ref().map(|v| v.insights.as_slice()).unwrap_or(&[])
    }

    /// Usage counters.
    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    /// History entries matching a query.
    pub fn history(&self, query: &HistoryQuery) -> Vec<&HistoryEntry> {
        self.history.list(query)
    }

    /// The underlying history repository.
    pub fn repository(&self) -> &R {
        &self.history
    }

    fn build_view(&self, dataset: ChartDataset, mode: ChartMode) -> Result<CurrentView> {
        let insights = self.engine.generate(&dataset, Some(mode))?;
        Ok(CurrentView {
            dataset,
            mode,
            insights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartDimension, ChartStyle};
    use crate::input::Cell;
    use crate::insight::DegeneratePolicy;

    fn table(rows: &[(&str, f64)]) -> RawTable {
        RawTable::new(
            vec!["Quarter".to_string(), "Revenue".to_string()],
            rows.iter()
                .map(|(l, v)| vec![Cell::from(*l), Cell::from(*v)])
                .collect(),
        )
        .unwrap()
    }

    fn selection() -> ColumnSelection {
        ColumnSelection::new("Quarter", "Revenue").unwrap()
    }

    #[test]
    fn test_process_updates_everything() {
        let mut session = Session::new();
        let view = session
            .process(&table(&[("Q1", 100.0), ("Q2", 150.0)]), &selection(), "q.csv")
            .unwrap();

        assert_eq!(view.dataset.len(), 2);
        assert_eq!(view.mode, ChartMode::default());
        assert!(!view.insights.is_empty());

        assert_eq!(session.stats().files_uploaded, 1);
        assert_eq!(session.stats().charts_created, 1);
        assert_eq!(session.repository().len(), 1);
    }

    #[test]
    fn test_failed_process_keeps_prior_state() {
        let mut session = Session::new();
        session
            .process(&table(&[("Q1", 100.0), ("Q2", 150.0)]), &selection(), "good.csv")
            .unwrap();
        let before = session.current().cloned();

        let bad = ColumnSelection::new("Quarter", "Profit").unwrap();
        let err = session
            .process(&table(&[("Q1", 1.0)]), &bad, "bad.csv")
            .unwrap_err();

        assert!(matches!(err, ExceleronError::ColumnNotFound { .. }));
        assert_eq!(session.current().cloned(), before);
        assert_eq!(session.stats().files_uploaded, 1);
        assert_eq!(session.repository().len(), 1);
    }

    #[test]
    fn test_degenerate_failure_keeps_prior_state() {
        let mut session = Session::new().with_insight(InsightConfig {
            degenerate: DegeneratePolicy::Fail,
        });
        session
            .process(&table(&[("Q1", 100.0), ("Q2", 150.0)]), &selection(), "good.csv")
            .unwrap();

        let err = session
            .process(&table(&[("Q1", 0.0), ("Q2", 10.0)]), &selection(), "zero.csv")
            .unwrap_err();
        assert!(matches!(err, ExceleronError::DegenerateResult { .. }));
        assert_eq!(
            session.current().unwrap().dataset.metadata.source_file_name,
            "good.csv"
        );
        assert_eq!(session.repository().len(), 1);
    }

    #[test]
    fn test_change_chart_mode() {
        let mut session = Session::new();
        let mode = ChartMode::new(ChartDimension::ThreeD, ChartStyle::Line);
        assert!(matches!(
            session.change_chart_mode(mode),
            Err(ExceleronError::NoActiveDataset)
        ));

        session
            .process(&table(&[("Q1", 100.0), ("Q2", 150.0)]), &selection(), "q.csv")
            .unwrap();
        let view = session.change_chart_mode(mode).unwrap();
        assert_eq!(view.mode, mode);
        assert_eq!(view.insights[0].details.chart_hint.as_deref(), Some("3d line chart"));
        assert_eq!(session.stats().charts_created, 2);
    }

    #[test]
    fn test_reload_resets_mode() {
        let mut session = Session::new();
        session
            .process(&table(&[("Q1", 1.0), ("Q2", 2.0)]), &selection(), "first.csv")
            .unwrap();
        session
            .process(&table(&[("Q1", 3.0), ("Q2", 4.0)]), &selection(), "second.csv")
            .unwrap();
        session
            .change_chart_mode(ChartMode::new(ChartDimension::TwoD, ChartStyle::Pie))
            .unwrap();

        let view = session.reload(1).unwrap();
        assert_eq!(view.dataset.metadata.source_file_name, "first.csv");
        assert_eq!(view.mode, ChartMode::default());
        assert!(matches!(session.reload(99), Err(ExceleronError::HistoryNotFound(99))));
    }

    #[test]
    fn test_delete_clears_current() {
        let mut session = Session::new();
        session
            .process(&table(&[("Q1", 1.0), ("Q2", 2.0)]), &selection(), "first.csv")
            .unwrap();
        session
            .process(&table(&[("Q1", 3.0), ("Q2", 4.0)]), &selection(), "second.csv")
            .unwrap();

        session.delete(1).unwrap();
        assert!(session.current().is_some());

        session.delete(2).unwrap();
        assert!(session.current().is_none());
        assert!(session.insights().is_empty());
        assert_eq!(session.stats().files_uploaded, 0);
        assert!(session.delete(2).is_err());
        assert_eq!(session.stats().files_uploaded, 0);
    }
}
