//! Assembly of the five report sheets.

use tracing::info;

use dprof_model::{
    CellRange, Comparison, ConditionalRule, Distribution, Highlight, ProfileOptions, ReportSheet,
    Table,
};
use dprof_stats::{
    SummaryTable, column_distribution, compute_summary, correlation_matrix, covariance_matrix,
};

use crate::frame::Frame;
use crate::layout::{place_summary_and_distribution, place_table};

pub const SUMMARY_SHEET: &str = "OrderSummaryStats";
pub const CORRELATION_SHEET: &str = "Correlation";
pub const COVARIANCE_SHEET: &str = "Co-Variance";
pub const SAMPLES_SHEET: &str = "150samples";

/// Builds report sheets for a loaded table.
#[derive(Debug, Clone, Default)]
pub struct ReportBuilder {
    options: ProfileOptions,
}

impl ReportBuilder {
    pub fn new(options: ProfileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProfileOptions {
        &self.options
    }

    /// Returns the DOV, OrderSummaryStats, Correlation, Co-Variance and
    /// 150samples sheets, in that order.
    pub fn build(&self, table: &Table) -> Vec<ReportSheet> {
        let summary = compute_summary(table, &self.options);
        vec![
            self.dov_sheet(table, &summary),
            self.summary_sheet(&summary),
            self.correlation_sheet(table),
            self.covariance_sheet(table),
            self.samples_sheet(table),
        ]
    }

    pub fn dov_sheet(&self, table: &Table, summary: &SummaryTable) -> ReportSheet {
        let distributions: Vec<Distribution> = table
            .columns()
            .iter()
            .map(|column| column_distribution(column, table.row_count(), &self.options))
            .collect();
        let sheet = place_summary_and_distribution(summary, &distributions);
        completed(&sheet);
        sheet
    }

    pub fn summary_sheet(&self, summary: &SummaryTable) -> ReportSheet {
        let mut sheet = ReportSheet::new(SUMMARY_SHEET);
        sheet.extend(place_table(
            SUMMARY_SHEET,
            &Frame::from_summary(summary),
            0,
            0,
            true,
        ));
        completed(&sheet);
        sheet
    }

    /// Correlation matrix with red/blue font rules on strong positive/negative values.
    pub fn correlation_sheet(&self, table: &Table) -> ReportSheet {
        let matrix = correlation_matrix(table).rounded(self.options.matrix_decimals);
        let mut sheet = ReportSheet::new(CORRELATION_SHEET);
        sheet.extend(place_table(
            CORRELATION_SHEET,
            &Frame::from_matrix(&matrix),
            0,
            0,
            true,
        ));

        if !matrix.is_empty() {
            let size = matrix.size();
            let range = CellRange {
                first_row: 3,
                first_col: 1,
                last_row: 3 + size as u32 - 1,
                last_col: size as u16,
            };
            let threshold = self.options.highlight_threshold;
            sheet.rules.push(ConditionalRule {
                range,
                comparison: Comparison::GreaterThanOrEqual,
                threshold,
                highlight: Highlight::Red,
            });
            sheet.rules.push(ConditionalRule {
                range,
                comparison: Comparison::LessThan,
                threshold: -threshold,
                highlight: Highlight::Blue,
            });
        }

        completed(&sheet);
        sheet
    }

    pub fn covariance_sheet(&self, table: &Table) -> ReportSheet {
        let matrix = covariance_matrix(table).rounded(self.options.matrix_decimals);
        let mut sheet = ReportSheet::new(COVARIANCE_SHEET);
        sheet.extend(place_table(
            COVARIANCE_SHEET,
            &Frame::from_matrix(&matrix),
            0,
            0,
            true,
        ));
        completed(&sheet);
        sheet
    }

    /// First and last `sample_rows` rows, labelled by source row number.
    pub fn samples_sheet(&self, table: &Table) -> ReportSheet {
        let n = self.options.sample_rows;
        let mut sheet = ReportSheet::new(SAMPLES_SHEET);
        sheet.extend(place_table(
            &format!("{SAMPLES_SHEET} (Top {n})"),
            &Frame::from_table(&table.head(n)),
            0,
            0,
            true,
        ));
        sheet.extend(place_table(
            &format!("{SAMPLES_SHEET} (Tail {n})"),
            &Frame::from_table(&table.tail(n)),
            self.options.tail_sample_offset,
            0,
            true,
        ));
        completed(&sheet);
        sheet
    }
}

fn completed(sheet: &ReportSheet) {
    info!(sheet = %sheet.name, cells = sheet.cells.len(), "sheet completed");
}
