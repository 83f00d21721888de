use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gdc_api::DataDownload;
use gdc_cli::types::{ClinicalRunResult, DownloadResult, LookupResult, ManifestResult};

pub fn print_clinical_summary(result: &ClinicalRunResult) {
    let outcome = &result.outcome;
    println!("Input: {}", result.input_dir.display());
    println!("Output: {}", result.output_file.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("XML files"),
        header_cell("Records"),
        header_cell("Failed"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(outcome.files.len()),
        Cell::new(outcome.table.len()).add_attribute(Attribute::Bold),
        count_cell(outcome.failures.len(), Color::Red),
        count_cell(outcome.warning_count(), Color::Yellow),
    ]);
    println!("{table}");

    if outcome.has_failures() {
        print_failure_table(result);
    }
}

fn print_failure_table(result: &ClinicalRunResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("File"), header_cell("Error")]);
    apply_summary_table_style(&mut table);
    for failure in &result.outcome.failures {
        let file = failure
            .path
            .strip_prefix(&result.input_dir)
            .unwrap_or(&failure.path);
        table.add_row(vec![
            Cell::new(file.display()),
            Cell::new(&failure.error).fg(Color::Red),
        ]);
    }
    println!("{table}");
}

pub fn print_lookup_summary(result: &LookupResult) {
    let Some(output) = &result.output_file else {
        println!("No results found");
        return;
    };
    let (key, value) = result.table.headers();
    let mut table = Table::new();
    table.set_header(vec![header_cell(key), header_cell(value)]);
    apply_table_style(&mut table);
    for (left, right) in result.table.rows() {
        table.add_row(vec![left, right]);
    }
    println!("{table}");
    print_written(output);
}

pub fn print_manifest_summary(result: &ManifestResult) {
    let Some(output) = &result.output_file else {
        println!("No files matching the query");
        return;
    };
    let mut table = Table::new();
    table.set_header(vec![header_cell("File ID"), header_cell("File name")]);
    apply_table_style(&mut table);
    for hit in &result.files {
        table.add_row(vec![
            Cell::new(&hit.file_id),
            hit.file_name.as_deref().map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    println!("{table}");
    print_written(output);
}

pub fn print_download_summary(result: &DownloadResult) {
    match &result.download {
        DataDownload::Single(path) => print_written(path),
        DataDownload::Archive(path) => {
            println!("{} files downloaded as {}", result.requested, path.display());
            if !result.extracted.is_empty() {
                let mut table = Table::new();
                table.set_header(vec![header_cell("Extracted")]);
                apply_table_style(&mut table);
                for file in &result.extracted {
                    table.add_row(vec![Cell::new(file.display())]);
                }
                println!("{table}");
            }
        }
    }
}

fn print_written(path: &Path) {
    println!("Wrote {}", path.display());
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
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
