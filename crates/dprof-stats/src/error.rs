//! Error types for statistics computation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    /// Requested column is not part of the table.
    #[error("column '{column}' not found in table")]
    UnknownColumn { column: String },
}

pub type Result<T> = std::result::Result<T, StatsError>;
