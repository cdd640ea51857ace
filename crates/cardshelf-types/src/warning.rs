use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::Field;

/// Non-fatal problem found while loading a catalog.
///
/// Row numbers are 1-based positions in the parsed row sequence, header
/// included, so they line up with spreadsheet row numbers for exports
/// without embedded newlines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadWarning {
    /// Input ended while a quoted field was still open.
    UnterminatedQuote { row: usize },
    /// Data row cell count differs from the header.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Numeric cell could not be read; the value was replaced by 0.
    InvalidNumber {
        row: usize,
        field: Field,
        value: String,
    },
    /// Input was not valid UTF-8; bad bytes became U+FFFD. `row` is the line
    /// holding the first bad byte.
    InvalidEncoding { row: usize },
}

impl LoadWarning {
    pub fn row(&self) -> usize {
        match self {
            LoadWarning::UnterminatedQuote { row }
            | LoadWarning::RaggedRow { row, .. }
            | LoadWarning::InvalidNumber { row, .. }
            | LoadWarning::InvalidEncoding { row } => *row,
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::UnterminatedQuote { row } => {
                write!(f, "row {}: unterminated quoted field at end of input", row)
            }
            LoadWarning::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {}: expected {} cells, found {}",
                row, expected, found
            ),
            LoadWarning::InvalidNumber { row, field, value } => write!(
                f,
                "row {}: '{}' is not a number in column {}, using 0",
                row,
                value,
                field.header()
            ),
            LoadWarning::InvalidEncoding { row } => write!(
                f,
                "row {}: text is not valid UTF-8, invalid bytes replaced",
                row
            ),
        }
    }
}
