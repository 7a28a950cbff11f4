use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dprof_cli::types::{FileReport, FileStatus, RunReport};

pub fn print_summary(report: &RunReport) {
    println!("Input: {}", report.input.display());
    println!("Output: {}", report.analysis_dir.display());
    if let Some(predictor) = &report.predictor {
        println!("Predictor: {predictor}");
    }
    if report.files.is_empty() {
        println!("No .csv files found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Report"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);

    let mut total_rows = 0usize;
    for file in &report.files {
        if let FileStatus::Written(outcome) = &file.status {
            total_rows += outcome.rows;
        }
        table.add_row(file_row(file));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!("{} written", report.written_count())).add_attribute(Attribute::Bold),
        failed_cell(report.failed_count()),
    ]);
    println!("{table}");

    if report.has_errors() {
        eprintln!("Errors:");
        for file in &report.files {
            if let FileStatus::Failed(message) = &file.status {
                eprintln!("- {}: {message}", file.input.display());
            }
        }
    }
}

fn file_row(file: &FileReport) -> Vec<Cell> {
    let name = Cell::new(file_name(&file.input))
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold);
    match &file.status {
        FileStatus::Written(outcome) => vec![
            name,
            Cell::new(outcome.rows),
            Cell::new(outcome.columns),
            Cell::new(file_name(&outcome.output)),
            Cell::new("✓")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ],
        FileStatus::Failed(_) => vec![
            name,
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("-"),
            Cell::new("✗").fg(Color::Red).add_attribute(Attribute::Bold),
        ],
    }
}

fn failed_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(format!("{count} failed"))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("0 failed")
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
