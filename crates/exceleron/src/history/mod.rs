//! Upload history and usage counters.
//!
//! History lives behind the [`HistoryRepository`] trait so the session flow
//! does not depend on where entries are kept. [`InMemoryHistory`] is the only
//! implementation; entries last as long as the process.

mod entry;
mod query;
mod repository;

pub use entry::{HistoryEntry, HistoryStatus, NewHistoryEntry, UserStats};
pub use query::{HistoryQuery, HistorySort};
pub use repository::{HistoryRepository, InMemoryHistory};
