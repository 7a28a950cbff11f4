//! CLI library components for the data profiler.

pub mod logging;
pub mod runner;
pub mod types;
