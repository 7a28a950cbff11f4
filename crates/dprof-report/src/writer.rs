//! Workbook rendering of report sheets.

use std::borrow::Cow;
use std::path::Path;

use rust_xlsxwriter::{
    Color, ConditionalFormatCell, ConditionalFormatCellRule, Format, FormatUnderline, Workbook,
    Worksheet,
};
use tracing::{debug, warn};

use dprof_model::{
    Cell, CellStyle, CellValue, Comparison, ConditionalRule, Highlight, ReportSheet,
};

use crate::error::{ReportError, Result};

/// Destination for rendered report sheets.
pub trait WorkbookWriter {
    /// Appends a sheet after those already written.
    fn write_sheet(&mut self, sheet: &ReportSheet) -> Result<()>;

    /// Persists every written sheet to `path`.
    fn finish(&mut self, path: &Path) -> Result<()>;
}

/// [`WorkbookWriter`] producing an `.xlsx` file.
///
/// Sheets are assembled in memory; nothing touches the filesystem until
/// [`finish`](WorkbookWriter::finish).
pub struct XlsxReportWriter {
    workbook: Workbook,
    formats: StyleFormats,
}

impl XlsxReportWriter {
    pub fn new() -> Self {
        Self {
            workbook: Workbook::new(),
            formats: StyleFormats::new(),
        }
    }
}

impl Default for XlsxReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkbookWriter for XlsxReportWriter {
    fn write_sheet(&mut self, sheet: &ReportSheet) -> Result<()> {
        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for cell in &sheet.cells {
            write_cell(worksheet, &sheet.name, cell, self.formats.get(cell.style))?;
        }
        if let Some(pane) = sheet.freeze {
            worksheet.set_freeze_panes(pane.row, pane.col)?;
        }
        for rule in &sheet.rules {
            add_rule(worksheet, rule)?;
        }

        debug!(sheet = %sheet.name, cells = sheet.cells.len(), "sheet rendered");
        Ok(())
    }

    fn finish(&mut self, path: &Path) -> Result<()> {
        let buffer = self.workbook.save_to_buffer()?;
        std::fs::write(path, buffer).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Writes every sheet in order, then saves the workbook once.
pub fn write_sheets<W: WorkbookWriter>(
    writer: &mut W,
    sheets: &[ReportSheet],
    path: &Path,
) -> Result<()> {
    for sheet in sheets {
        writer.write_sheet(sheet)?;
    }
    writer.finish(path)
}

/// Renders `sheets` into a new `.xlsx` workbook at `path`, replacing any existing file.
pub fn write_report(path: &Path, sheets: &[ReportSheet]) -> Result<()> {
    let mut writer = XlsxReportWriter::new();
    write_sheets(&mut writer, sheets, path)
}

/// Longest string, in characters, a worksheet cell can hold.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Cuts `text` to at most [`MAX_CELL_CHARS`] characters.
pub fn fit_cell_text(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => Cow::Owned(text[..end].to_string()),
        None => Cow::Borrowed(text),
    }
}

/// Formula error shown for a non-finite number.
pub fn error_marker(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("#NUM!")
    } else if value == f64::INFINITY {
        Some("#DIV/0!")
    } else if value == f64::NEG_INFINITY {
        Some("-#DIV/0!")
    } else {
        None
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    sheet: &str,
    cell: &Cell,
    format: Option<&Format>,
) -> Result<()> {
    let (row, col) = (cell.row, cell.col);
    match (&cell.value, format) {
        (CellValue::Blank, _) => {}
        (CellValue::Number(n), format) => {
            match (error_marker(*n), format) {
                (Some(marker), Some(fmt)) => {
                    worksheet.write_formula_with_format(row, col, marker, fmt)?;
                }
                (Some(marker), None) => {
                    worksheet.write_formula(row, col, marker)?;
                }
                (None, Some(fmt)) => {
                    worksheet.write_number_with_format(row, col, *n, fmt)?;
                }
                (None, None) => {
                    worksheet.write_number(row, col, *n)?;
                }
            }
        }
        (CellValue::Text(s), format) => {
            let text = fit_cell_text(s);
            if let Cow::Owned(_) = text {
                warn!(sheet, row, col, chars = s.chars().count(), "cell text truncated");
            }
            match format {
                Some(fmt) => worksheet.write_string_with_format(row, col, text.as_ref(), fmt)?,
                None => worksheet.write_string(row, col, text.as_ref())?,
            };
        }
    }
    Ok(())
}

fn add_rule(worksheet: &mut Worksheet, rule: &ConditionalRule) -> Result<()> {
    let format = Format::new().set_font_color(match rule.highlight {
        Highlight::Red => Color::Red,
        Highlight::Blue => Color::Blue,
    });
    let cell_rule = match rule.comparison {
        Comparison::GreaterThanOrEqual => {
            ConditionalFormatCellRule::GreaterThanOrEqualTo(rule.threshold)
        }
        Comparison::LessThan => ConditionalFormatCellRule::LessThan(rule.threshold),
    };
    let conditional = ConditionalFormatCell::new()
        .set_rule(cell_rule)
        .set_format(format);
    let range = rule.range;
    worksheet.add_conditional_format(
        range.first_row,
        range.first_col,
        range.last_row,
        range.last_col,
        &conditional,
    )?;
    Ok(())
}

/// One prebuilt format per non-plain [`CellStyle`].
struct StyleFormats {
    bold: Format,
    title: Format,
    italic: Format,
    underline: Format,
}

impl StyleFormats {
    fn new() -> Self {
        Self {
            bold: Format::new().set_bold(),
            title: Format::new().set_bold().set_font_size(14),
            italic: Format::new().set_italic(),
            underline: Format::new().set_underline(FormatUnderline::Single),
        }
    }

    fn get(&self, style: CellStyle) -> Option<&Format> {
        match style {
            CellStyle::Plain => None,
            CellStyle::Bold => Some(&self.bold),
            CellStyle::Title => Some(&self.title),
            CellStyle::Italic => Some(&self.italic),
            CellStyle::Underline => Some(&self.underline),
        }
    }
}
