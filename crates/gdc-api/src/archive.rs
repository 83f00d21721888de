//! Unpacking of multi-file `/data` downloads.

use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use tar::Archive;
use tracing::debug;

use crate::error::{ApiError, Result};

/// Extracts a tar.gz archive into `dest_dir` and returns the unpacked files.
///
/// Entries that would land outside `dest_dir` are skipped.
pub fn extract_tar_gz(archive_path: &Path, dest_dir: &Path) -> Result<Vec<PathBuf>> {
    let file = File::open(archive_path)?;
    let mut archive = Archive::new(GzDecoder::new(file));
    let mut extracted = Vec::new();

    let entries = archive
        .entries()
        .map_err(|e| ApiError::ArchiveExtraction(format!("failed to read tar entries: {e}")))?;
    for entry_result in entries {
        let mut entry = entry_result
            .map_err(|e| ApiError::ArchiveExtraction(format!("failed to read tar entry: {e}")))?;
        let relative = entry
            .path()
            .map_err(|e| ApiError::ArchiveExtraction(format!("invalid entry path: {e}")))?
            .into_owned();
        let is_file = entry.header().entry_type().is_file();

        let unpacked = entry.unpack_in(dest_dir).map_err(|e| {
            ApiError::ArchiveExtraction(format!("failed to unpack {}: {e}", relative.display()))
        })?;
        if !unpacked {
            debug!(entry = %relative.display(), "skipped archive entry outside output directory");
            continue;
        }
        if is_file {
            extracted.push(dest_dir.join(&relative));
        }
    }

    extracted.sort();
    debug!(count = extracted.len(), dest = %dest_dir.display(), "extracted archive");
    Ok(extracted)
}
