//! Storage error model.

use thiserror::Error;

/// Failure while reading or writing the inventory file.
///
/// Two conditions are deliberately NOT errors: a missing file loads as an
/// empty table, and an unparseable expiry date loads as an absent date.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("inventory file io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("inventory file could not be parsed: {0}")]
    Csv(#[from] csv::Error),

    /// A row carried a value the schema has no lenient reading for.
    #[error("malformed {field} in row {row}: '{value}'")]
    Malformed {
        row: usize,
        field: &'static str,
        value: String,
    },
}
