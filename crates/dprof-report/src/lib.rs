//! Profile report generation.
//!
//! - **Layout**: pure placement of summaries, distributions and frames into
//!   [`ReportSheet`] cell grids
//! - **Builder**: the five report sheets for a loaded table
//! - **Writer**: `.xlsx` rendering behind the [`WorkbookWriter`] seam

mod builder;
mod error;
mod frame;
mod layout;
mod writer;

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, info_span};

use dprof_model::{ProfileOptions, ReportSheet};

pub use builder::{
    CORRELATION_SHEET, COVARIANCE_SHEET, ReportBuilder, SAMPLES_SHEET, SUMMARY_SHEET,
};
pub use error::{ReportError, Result};
pub use frame::{Frame, FrameColumn};
pub use layout::{DOV_LABELS, DOV_SHEET, place_summary_and_distribution, place_table};
pub use writer::{
    MAX_CELL_CHARS, WorkbookWriter, XlsxReportWriter, error_marker, fit_cell_text, write_report,
    write_sheets,
};

/// Result of profiling one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub sheets: usize,
}

/// Loads `input`, builds every report sheet and writes the workbook to `output`.
pub fn profile_file(
    input: &Path,
    output: &Path,
    options: &ProfileOptions,
) -> Result<ProfileOutcome> {
    let span = info_span!("profile_file", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let table = dprof_ingest::load_table(input)?;
    info!(rows = table.row_count(), columns = table.column_count(), "table loaded");

    let sheets: Vec<ReportSheet> = ReportBuilder::new(options.clone()).build(&table);
    write_report(output, &sheets)?;

    info!(
        output = %output.display(),
        sheets = sheets.len(),
        duration_ms = start.elapsed().as_millis(),
        "report written"
    );
    Ok(ProfileOutcome {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        rows: table.row_count(),
        columns: table.column_count(),
        sheets: sheets.len(),
    })
}
