//! Recursive discovery of clinical XML files.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// Returns true if the path has an `.xml` extension (case-insensitive).
pub fn is_xml_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("xml"))
        .unwrap_or(false)
}

/// Lists all XML files below a directory, descending into subdirectories.
///
/// Returns paths sorted lexicographically so batch output does not depend on
/// the order the file system hands out directory entries. Symlinked
/// directories are not followed.
pub fn list_xml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let entries = std::fs::read_dir(&current).map_err(|e| IngestError::DirectoryRead {
            path: current.clone(),
            source: e,
        })?;

        for entry_result in entries {
            let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
                path: current.clone(),
                source: e,
            })?;
            let file_type = entry.file_type().map_err(|e| IngestError::DirectoryRead {
                path: current.clone(),
                source: e,
            })?;
            let path = entry.path();

            if file_type.is_dir() {
                pending.push(path);
            } else if path.is_file() && is_xml_file(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    debug!(dir = %dir.display(), file_count = files.len(), "discovered xml files");

    Ok(files)
}
