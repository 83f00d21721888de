//! Two-column lookup tables written by the API commands.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use crate::error::{OutputError, Result};
use crate::fs::ensure_parent_dir;

/// A key/value table with named columns, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    headers: [String; 2],
    rows: Vec<(String, String)>,
}

impl LookupTable {
    pub fn new(key_header: impl Into<String>, value_header: impl Into<String>) -> Self {
        Self {
            headers: [key_header.into(), value_header.into()],
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.rows.push((key.into(), value.into()));
    }

    pub fn headers(&self) -> (&str, &str) {
        (&self.headers[0], &self.headers[1])
    }

    pub fn rows(&self) -> &[(String, String)] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Writes `table` to `writer` as TSV with its header row.
pub fn write_lookup_table_to<W: Write>(writer: W, table: &LookupTable) -> Result<()> {
    let mut tsv = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    tsv.write_record(&table.headers)?;
    for (key, value) in &table.rows {
        tsv.write_record([key, value])?;
    }
    tsv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes `table` to `path`, creating directories and replacing any existing file.
pub fn write_lookup_table(path: &Path, table: &LookupTable) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = File::create(path).map_err(|e| OutputError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_lookup_table_to(file, table)?;
    info!(path = %path.display(), row_count = table.len(), "wrote lookup table");
    Ok(())
}
