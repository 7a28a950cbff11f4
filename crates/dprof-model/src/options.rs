//! Configuration options for profiling runs.

use serde::{Deserialize, Serialize};

/// Options controlling statistics and report layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOptions {
    /// Columns with more distinct values than this are continuous (numeric)
    /// or categorical (text), and their distribution is truncated.
    pub continuous_threshold: usize,

    /// Columns with fewer distinct values than this are discrete (numeric)
    /// or categorical (text).
    pub discrete_threshold: usize,

    /// Distribution entries kept for high-cardinality columns.
    pub truncated_distribution_rows: usize,

    /// Rows taken from each end of the table for the samples sheet.
    pub sample_rows: usize,

    /// Start row of the tail sample fragment.
    pub tail_sample_offset: u32,

    /// Absolute correlation at which cells are highlighted.
    pub highlight_threshold: f64,

    /// Decimal places kept in correlation and covariance matrices.
    pub matrix_decimals: u32,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            continuous_threshold: 500,
            discrete_threshold: 100,
            truncated_distribution_rows: 100,
            sample_rows: 75,
            tail_sample_offset: 80,
            highlight_threshold: 0.60,
            matrix_decimals: 2,
        }
    }
}
