//! Numeric reading of value-axis cells.
//!
//! Spreadsheet values arrive as either typed numbers or free text such as
//! `"$1,200"` or `"15%"`. Text is reduced to its digits, minus signs and
//! decimal points before being read.
//!
//! Two policies exist:
//!
//! - [`parse_numeric`] is strict: the reduced text must be a complete number.
//! - [`coerce_numeric`] keeps the lenient behavior of the upload form: the
//!   longest leading number is used and anything unreadable becomes `0`.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::input::Cell;

static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.\-]").unwrap());

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").unwrap());

/// A cell that cannot be read as a number.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot read '{raw}' as a number")]
pub struct NumericParseError {
    /// The cell text as it appeared in the sheet.
    pub raw: String,
}

/// Remove every character that is not a digit, minus sign or decimal point.
pub fn strip_non_numeric(text: &str) -> String {
    NON_NUMERIC.replace_all(text, "").into_owned()
}

/// Read a cell as a number, failing on anything that is not fully numeric.
pub fn parse_numeric(cell: &Cell) -> Result<f64, NumericParseError> {
    match cell {
        Cell::Number(n) if n.is_finite() => Ok(*n),
        Cell::Number(n) => Err(NumericParseError { raw: n.to_string() }),
        Cell::Text(text) => {
            let stripped = strip_non_numeric(text);
            match LEADING_NUMBER.find(&stripped) {
                Some(m) if m.end() == stripped.len() => stripped
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .ok_or_else(|| NumericParseError { raw: text.clone() }),
                _ => Err(NumericParseError { raw: text.clone() }),
            }
        }
        Cell::Empty => Err(NumericParseError { raw: String::new() }),
    }
}

/// Read a cell as a number, falling back to `0` when nothing is readable.
pub fn coerce_numeric(cell: &Cell) -> f64 {
    match cell {
        Cell::Number(n) if n.is_finite() => *n,
        Cell::Number(n) => {
            tracing::debug!(raw = %n, "non-finite value coerced to 0");
            0.0
        }
        Cell::Text(text) => {
            let stripped = strip_non_numeric(text);
            let value = LEADING_NUMBER
                .find(&stripped)
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .filter(|n| n.is_finite());

            match value {
                Some(n) => n,
                None => {
                    tracing::debug!(raw = %text, "unreadable value coerced to 0");
                    0.0
                }
            }
        }
        Cell::Empty => 0.0,
    }
}
