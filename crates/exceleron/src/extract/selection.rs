//! The user's choice of category and value columns.

use serde::{Deserialize, Serialize};

use crate::error::{ExceleronError, Result};
use crate::input::RawTable;

/// A pair of distinct column names: X for categories, Y for values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelection {
    pub x: String,
    pub y: String,
}

impl ColumnSelection {
    /// Create a selection, rejecting the same column on both axes.
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Result<Self> {
        let x = x.into();
        let y = y.into();
        if x == y {
            return Err(ExceleronError::SameColumn(x));
        }
        Ok(Self { x, y })
    }

    /// Resolve both names to header positions in the table.
    ///
    /// Returns `(x_index, y_index)`; the first header with a matching name is used.
    pub fn resolve(&self, table: &RawTable) -> Result<(usize, usize)> {
        let x_index = table.column_index(&self.x);
        let y_index = table.column_index(&self.y);

        match (x_index, y_index) {
            (Some(x), Some(y)) => Ok((x, y)),
            _ => {
                let mut missing = Vec::new();
                if x_index.is_none() {
                    missing.push(self.x.clone());
                }
                if y_index.is_none() {
                    missing.push(self.y.clone());
                }
                Err(ExceleronError::ColumnNotFound {
                    missing,
                    available: table.headers.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RawTable {
        RawTable::new(vec!["Quarter".into(), "Revenue".into()], vec![]).unwrap()
    }

    #[test]
    fn test_same_column_rejected() {
        assert!(matches!(
            ColumnSelection::new("Revenue", "Revenue"),
            Err(ExceleronError::SameColumn(name)) if name == "Revenue"
        ));
    }

    #[test]
    fn test_resolve() {
        let sel = ColumnSelection::new("Revenue", "Quarter").unwrap();
        assert_eq!(sel.resolve(&table()).unwrap(), (1, 0));
    }

    #[test]
    fn test_resolve_reports_missing() {
        let sel = ColumnSelection::new("Month", "Revenue").unwrap();
        match sel.resolve(&table()) {
            Err(ExceleronError::ColumnNotFound { missing, available }) => {
                assert_eq!(missing, vec!["Month"]);
                assert_eq!(available, vec!["Quarter", "Revenue"]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_match_is_exact() {
        let sel = ColumnSelection::new("quarter", "Revenue").unwrap();
        assert!(sel.resolve(&table()).is_err());
    }
}
