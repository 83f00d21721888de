//! Writing extraction and lookup results to disk.
//!
//! All writers produce tab-separated files with a header row, create the
//! parent directory when needed and replace existing files.

mod error;
mod fs;
mod lookup;
mod tsv;

pub use error::{OutputError, Result};
pub use fs::{ensure_dir, ensure_parent_dir};
pub use lookup::{LookupTable, write_lookup_table, write_lookup_table_to};
pub use tsv::{read_table, read_table_from, write_table, write_table_to};
