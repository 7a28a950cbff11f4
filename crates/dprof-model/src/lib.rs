pub mod error;
pub mod options;
pub mod sheet;
pub mod summary;
pub mod table;

pub use error::{ModelError, Result};
pub use options::ProfileOptions;
pub use sheet::{
    Cell, CellRange, CellStyle, Comparison, ConditionalRule, FreezePane, Highlight, ReportSheet,
};
pub use summary::{
    ColumnSummary, Distribution, DistributionEntry, NullPercent, NumericStats, SUMMARY_FIELDS,
    VariableClass,
};
pub use table::{CellValue, Column, ColumnData, ColumnKind, Table};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_deserialize_with_defaults() {
        let options: ProfileOptions =
            serde_json::from_str(r#"{"sample_rows": 10}"#).expect("deserialize options");
        assert_eq!(options.sample_rows, 10);
        assert_eq!(options.continuous_threshold, 500);
        assert_eq!(options.tail_sample_offset, 80);
    }

    #[test]
    fn sheet_serializes() {
        let mut sheet = ReportSheet::new("DOV");
        sheet.push(Cell::styled(0, 0, "Col Name", CellStyle::Bold));
        sheet.freeze = Some(FreezePane { row: 19, col: 1 });
        let json = serde_json::to_string(&sheet).expect("serialize sheet");
        let round: ReportSheet = serde_json::from_str(&json).expect("deserialize sheet");
        assert_eq!(round, sheet);
    }
}
