//! Clinical table serialization.
//!
//! Tables are written tab-separated with a header row and no index column.
//! Absent values are written as the literal `null`; reading a table back
//! turns `null` cells into absent values again.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use gdc_model::{
    ClinicalField, ClinicalRecord, FieldValue, NULL_MARKER, OutputTable, SURVIVAL_IN_DAYS,
    output_columns,
};
use tracing::info;

use crate::error::{OutputError, Result};
use crate::fs::ensure_parent_dir;

/// Writes `table` to `writer` as TSV.
pub fn write_table_to<W: Write>(writer: W, table: &OutputTable) -> Result<()> {
    let mut tsv = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    tsv.write_record(output_columns())?;
    for record in table {
        tsv.write_record(record.cells())?;
    }
    tsv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes `table` to `path`, creating directories and replacing any existing file.
pub fn write_table(path: &Path, table: &OutputTable) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| OutputError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_table_to(file, table)?;
    info!(path = %path.display(), row_count = table.len(), "wrote clinical table");
    Ok(())
}

/// Reads a table written by [`write_table_to`], matching columns by name.
pub fn read_table_from<R: Read>(reader: R) -> Result<OutputTable> {
    let mut tsv = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(reader);

    let headers = tsv.headers()?.clone();
    let positions: HashMap<&str, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim_matches('\u{feff}'), idx))
        .collect();
    let column = |name: &str| {
        positions
            .get(name)
            .copied()
            .ok_or_else(|| OutputError::MissingColumn {
                column: name.to_string(),
            })
    };
    let field_columns = ClinicalField::ALL
        .iter()
        .map(|field| Ok((*field, column(field.tag())?)))
        .collect::<Result<Vec<_>>>()?;
    let survival_column = column(SURVIVAL_IN_DAYS)?;

    let mut table = OutputTable::new();
    for (row, result) in tsv.records().enumerate() {
        let record = result?;
        let cell = |idx: usize| record.get(idx).filter(|value| *value != NULL_MARKER);

        let mut builder = ClinicalRecord::builder();
        for (field, idx) in &field_columns {
            let value = match cell(*idx) {
                Some(text) if field.is_day_count() => {
                    Some(FieldValue::Integer(parse_integer(field.tag(), text, row)?))
                }
                Some(text) => Some(FieldValue::from(text)),
                None => None,
            };
            builder.set(*field, value);
        }
        let survival = cell(survival_column)
            .map(|text| parse_integer(SURVIVAL_IN_DAYS, text, row))
            .transpose()?;
        table.push(builder.build(survival));
    }
    Ok(table)
}

/// Reads a clinical table from `path`.
pub fn read_table(path: &Path) -> Result<OutputTable> {
    let file = File::open(path).map_err(|e| OutputError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_table_from(file)
}

fn parse_integer(column: &str, value: &str, row: usize) -> Result<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| OutputError::InvalidInteger {
            column: column.to_string(),
            value: value.to_string(),
            row: row + 1,
        })
}
