//! Cell placement for report sheets.
//!
//! Everything here is pure: functions return placed [`Cell`]s or a complete
//! [`ReportSheet`] and never touch a workbook.

use dprof_model::{
    Cell, CellStyle, CellValue, ColumnSummary, Distribution, FreezePane, ReportSheet,
};
use dprof_stats::SummaryTable;
use tracing::warn;

use crate::frame::Frame;

/// Name of the summary and distribution sheet.
pub const DOV_SHEET: &str = "DOV";

/// Row labels of the DOV sheet's first column.
pub const DOV_LABELS: [(u32, &str, CellStyle); 17] = [
    (0, "Col Name", CellStyle::Bold),
    (1, "Data Type", CellStyle::Bold),
    (2, "count", CellStyle::Bold),
    (3, "NaN", CellStyle::Bold),
    (4, "NaN %", CellStyle::Bold),
    (5, "mean", CellStyle::Bold),
    (6, "median", CellStyle::Bold),
    (7, "std", CellStyle::Bold),
    (8, "var", CellStyle::Bold),
    (9, "range", CellStyle::Bold),
    (10, "0%", CellStyle::Bold),
    (11, "25%", CellStyle::Bold),
    (12, "50%", CellStyle::Bold),
    (13, "75%", CellStyle::Bold),
    (14, "100%", CellStyle::Bold),
    (VAR_TYPE_ROW, "Var Type", CellStyle::Plain),
    (17, "Notes", CellStyle::Plain),
];

const NAME_ROW: u32 = 0;
const VAR_TYPE_ROW: u32 = 16;
const DISTRIBUTION_HEADER_ROW: u32 = 18;
const DISTRIBUTION_ROW: u32 = 19;
const TRUNCATED_MARKER: &str = "> 500 unq";
/// Last worksheet column index.
const MAX_COL: u16 = 16_383;

/// Places a titled, headed frame with its top-left corner at `(start_row, start_col)`.
///
/// The title goes in the corner cell, headers two rows below it and values from
/// `start_row + 3`. With `use_row_index`, the row labels fill `start_col` in bold
/// and the data columns shift one to the right.
pub fn place_table(
    title: &str,
    frame: &Frame,
    start_row: u32,
    start_col: u16,
    use_row_index: bool,
) -> Vec<Cell> {
    let header_row = start_row + 2;
    let first_value_row = start_row + 3;
    let mut cells = Vec::with_capacity(1 + (frame.column_count() + 1) * (frame.row_count() + 1));

    cells.push(Cell::styled(start_row, start_col, title, CellStyle::Title));

    let mut col = start_col;
    if use_row_index {
        for (offset, label) in frame.index.iter().enumerate() {
            cells.push(Cell::styled(
                first_value_row + offset as u32,
                col,
                label.clone(),
                CellStyle::Bold,
            ));
        }
        col += 1;
    }

    for column in &frame.columns {
        cells.push(Cell::styled(header_row, col, column.name.as_str(), CellStyle::Bold));
        for (offset, value) in column.values.iter().enumerate() {
            cells.push(Cell::new(first_value_row + offset as u32, col, value.clone()));
        }
        col += 1;
    }

    cells
}

/// Builds the DOV sheet: one two-column block per profiled column holding its
/// summary fields, variable class and value distribution.
///
/// `distributions` is matched to `summaries` by position.
pub fn place_summary_and_distribution(
    summaries: &SummaryTable,
    distributions: &[Distribution],
) -> ReportSheet {
    let mut sheet = ReportSheet::new(DOV_SHEET);

    for (row, label, style) in DOV_LABELS {
        sheet.push(Cell::styled(row, 0, label, style));
    }

    for (position, (summary, distribution)) in summaries.iter().zip(distributions).enumerate() {
        let Some(col) = block_col(position) else {
            warn!(
                sheet = DOV_SHEET,
                placed = position,
                total = summaries.len(),
                "worksheet column limit reached"
            );
            break;
        };
        sheet.extend(place_summary_block(summary, col));
        sheet.extend(place_distribution_block(distribution, col));
    }

    sheet.freeze = Some(FreezePane {
        row: DISTRIBUTION_ROW,
        col: 1,
    });
    sheet
}

/// First column of the block at `position`, if the whole two-column block fits.
fn block_col(position: usize) -> Option<u16> {
    u16::try_from(position)
        .ok()
        .and_then(|p| p.checked_mul(2))
        .and_then(|p| p.checked_add(1))
        .filter(|col| *col < MAX_COL)
}

fn place_summary_block(summary: &ColumnSummary, col: u16) -> Vec<Cell> {
    let mut cells = vec![Cell::styled(
        NAME_ROW,
        col,
        summary.name.as_str(),
        CellStyle::Bold,
    )];
    // Field order matches DOV_LABELS rows 1 through 14.
    for (offset, value) in summary.field_cells().into_iter().enumerate() {
        if value.is_blank() {
            continue;
        }
        cells.push(Cell::new(NAME_ROW + 1 + offset as u32, col, value));
    }
    cells.push(Cell::new(VAR_TYPE_ROW, col, summary.class.as_str()));
    cells
}

fn place_distribution_block(distribution: &Distribution, col: u16) -> Vec<Cell> {
    let mut cells = vec![
        Cell::styled(DISTRIBUTION_HEADER_ROW, col, "DOV", CellStyle::Underline),
        Cell::styled(DISTRIBUTION_HEADER_ROW, col + 1, "DistPrc", CellStyle::Underline),
    ];

    let mut row = DISTRIBUTION_ROW;
    if distribution.truncated {
        cells.push(Cell::styled(row, col, TRUNCATED_MARKER, CellStyle::Italic));
        cells.push(Cell::new(row, col + 1, TRUNCATED_MARKER));
        row += 1;
    }

    for entry in &distribution.entries {
        if !entry.value.is_blank() {
            cells.push(Cell::new(row, col, entry.value.clone()));
        }
        cells.push(Cell::new(row, col + 1, CellValue::Number(entry.percentage)));
        row += 1;
    }
    cells
}
