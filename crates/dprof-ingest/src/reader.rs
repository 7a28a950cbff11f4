//! CSV loading into a typed [`Table`].
//!
//! Parsing and dtype inference are delegated to Polars. Every integer or
//! floating-point column becomes [`ColumnKind::Numeric`](dprof_model::ColumnKind),
//! as does a column holding only nulls; everything else (strings, booleans,
//! dates) is kept as text.

use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{
    Column as FrameColumn, CsvReadOptions, DataFrame, DataType, NullValues, SerReader,
};
use tracing::debug;

use dprof_model::{Column, Table};

use crate::error::{IngestError, Result};

/// Tokens read as nulls in addition to empty fields.
pub const NULL_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Reads the header row of a CSV file.
///
/// Fails with [`IngestError::EmptyCsv`] for an empty file and with
/// [`IngestError::NoHeaderDetected`] when every header cell is blank.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let headers = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let columns: Vec<String> = headers
        .iter()
        .map(|h| h.trim().trim_matches('\u{feff}').to_string())
        .collect();
    if columns.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    Ok(columns)
}

/// Loads a comma-separated file with a header row into a [`Table`].
pub fn load_table(path: &Path) -> Result<Table> {
    let headers = read_csv_headers(path)?;
    let null_values = NullValues::AllColumns(NULL_TOKENS.iter().map(|t| (*t).into()).collect());
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|opts| opts.with_null_values(Some(null_values.clone())))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!(
        path = %path.display(),
        header_count = headers.len(),
        rows = df.height(),
        columns = df.width(),
        "csv parsed"
    );
    table_from_frame(&df)
}

/// Converts a DataFrame into a [`Table`], deciding each column's kind from its dtype.
pub fn table_from_frame(df: &DataFrame) -> Result<Table> {
    let columns = df
        .get_columns()
        .iter()
        .map(convert_column)
        .collect::<Result<Vec<_>>>()?;
    Ok(Table::new(columns)?)
}

fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

fn convert_column(column: &FrameColumn) -> Result<Column> {
    let name = column.name().to_string();
    let dtype = column.dtype().to_string();
    // A column with no values at all has no inferred type; it is profiled as numeric.
    if !column.is_empty() && column.null_count() == column.len() {
        return Ok(Column::numeric(name, "f64", vec![None; column.len()]));
    }
    if is_numeric_dtype(column.dtype()) {
        let floats = column.cast(&DataType::Float64)?;
        let values: Vec<Option<f64>> = floats.f64()?.iter().collect();
        Ok(Column::numeric(name, dtype, values))
    } else {
        let strings = column.cast(&DataType::String)?;
        let values: Vec<Option<String>> = strings
            .str()?
            .iter()
            .map(|value| value.map(str::to_string))
            .collect();
        Ok(Column::text(name, dtype, values))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use dprof_model::{CellValue, ColumnKind};
    use tempfile::NamedTempFile;

    use super::*;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_headers() {
        let file = create_temp_csv("A,B,C\n1,2,3\n");
        let headers = read_csv_headers(file.path()).unwrap();
        assert_eq!(headers, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_read_headers_empty_file() {
        let file = create_temp_csv("");
        let err = read_csv_headers(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyCsv { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_table(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_infers_kinds() {
        let file = create_temp_csv("age,city\n20,NY\n30,NY\n40,LA\n,LA\n");
        let table = load_table(file.path()).unwrap();
        assert_eq!(table.row_count(), 4);
        let age = table.column("age").unwrap();
        assert_eq!(age.kind(), ColumnKind::Numeric);
        assert_eq!(age.null_count(), 1);
        let city = table.column("city").unwrap();
        assert_eq!(city.kind(), ColumnKind::Text);
        assert_eq!(city.cell(2), CellValue::text("LA"));
    }

    #[test]
    fn test_all_null_column_is_numeric() {
        let file = create_temp_csv("a,b\n1,\n2,\n");
        let table = load_table(file.path()).unwrap();
        let b = table.column("b").unwrap();
        assert_eq!(b.kind(), ColumnKind::Numeric);
        assert_eq!(b.dtype, "f64");
        assert_eq!(b.null_count(), 2);
        assert_eq!(table.numeric_columns().count(), 2);
    }

    #[test]
    fn test_null_tokens() {
        let file = create_temp_csv("x,y\n1.5,a\nNaN,NA\n2.5,b\n");
        let table = load_table(file.path()).unwrap();
        let x = table.column("x").unwrap();
        assert_eq!(x.kind(), ColumnKind::Numeric);
        assert_eq!(x.null_count(), 1);
        assert_eq!(table.column("y").unwrap().null_count(), 1);
    }
}
