//! Writer-independent description of a report sheet.

use serde::{Deserialize, Serialize};

use crate::table::CellValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellStyle {
    #[default]
    Plain,
    Bold,
    /// 14pt bold sheet or fragment title.
    Title,
    Italic,
    Underline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub row: u32,
    pub col: u16,
    pub value: CellValue,
    pub style: CellStyle,
}

impl Cell {
    pub fn new(row: u32, col: u16, value: impl Into<CellValue>) -> Self {
        Self {
            row,
            col,
            value: value.into(),
            style: CellStyle::Plain,
        }
    }

    pub fn styled(row: u32, col: u16, value: impl Into<CellValue>, style: CellStyle) -> Self {
        Self {
            row,
            col,
            value: value.into(),
            style,
        }
    }
}

/// Inclusive rectangular cell range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRange {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    GreaterThanOrEqual,
    LessThan,
}

/// Font color applied by a conditional rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Highlight {
    Red,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionalRule {
    pub range: CellRange,
    pub comparison: Comparison,
    pub threshold: f64,
    pub highlight: Highlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezePane {
    pub row: u32,
    pub col: u16,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportSheet {
    pub name: String,
    pub cells: Vec<Cell>,
    pub freeze: Option<FreezePane>,
    pub rules: Vec<ConditionalRule>,
}

impl ReportSheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    pub fn extend(&mut self, fragment: impl IntoIterator<Item = Cell>) {
        self.cells.extend(fragment);
    }

    /// Last cell written at a position, mirroring writer overwrite semantics.
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells
            .iter()
            .rev()
            .find(|cell| cell.row == row && cell.col == col)
    }

    pub fn value_at(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.cell_at(row, col).map(|cell| &cell.value)
    }

    /// Highest (row, col) touched by any cell.
    pub fn extent(&self) -> Option<(u32, u16)> {
        let max_row = self.cells.iter().map(|cell| cell.row).max()?;
        let max_col = self.cells.iter().map(|cell| cell.col).max()?;
        Some((max_row, max_col))
    }
}
