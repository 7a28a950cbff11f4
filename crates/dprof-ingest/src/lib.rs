//! Table ingestion for data profiling.
//!
//! - **CSV Loading**: read a header-row CSV into a [`dprof_model::Table`] with an
//!   explicit numeric/text kind per column
//! - **Discovery**: list the table files directly inside a directory
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use dprof_ingest::{list_table_files, load_table};
//!
//! for path in list_table_files(Path::new("data"))? {
//!     let table = load_table(&path)?;
//!     println!("{}: {} rows", path.display(), table.row_count());
//! }
//! ```

mod discovery;
mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{NULL_TOKENS, load_table, read_csv_headers, table_from_frame};

// === File Discovery ===
pub use discovery::{TABLE_EXTENSION, is_table_file_name, list_table_files};
