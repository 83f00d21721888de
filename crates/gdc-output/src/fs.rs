//! Output path preparation.

use std::path::Path;

use tracing::info;

use crate::error::{OutputError, Result};

/// Creates the directory that will hold `path`, if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Creates `dir` and any missing ancestors.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    info!(dir = %dir.display(), "creating output directory");
    std::fs::create_dir_all(dir).map_err(|e| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })
}
