//! Statistics engine for tabular profiling.
//!
//! - **Summary**: count, nulls, null percentage and (numeric columns only) mean,
//!   median, standard deviation, variance, range and quartiles.
//! - **Distribution**: share of rows per distinct observed value.
//! - **Classification**: continuous / discrete / categorical by cardinality.
//! - **Matrices**: pairwise Pearson correlation and covariance.
//!
//! Undefined statistics are `NaN`, never errors.

pub mod descriptive;
mod distribution;
mod error;
mod matrix;
mod summary;

pub use distribution::{classify, column_distribution, compute_distribution, distinct_count};
pub use error::{Result, StatsError};
pub use matrix::{Matrix, correlation_matrix, covariance_matrix};
pub use summary::{SummaryTable, compute_summary, summarize_column};
