//! Display-side sampling for chart renderers.
//!
//! Renderers cap how many points they draw. The functions here build a
//! separate [`DisplaySeries`] and never touch the underlying dataset.

mod series;
mod summary;

pub use series::{DisplayPoint, DisplaySeries};
pub use summary::SummaryStats;
