//! Reading identifier lists from the command line or from files.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

/// Splits a single value or comma-separated list, trimming and dropping blanks.
pub fn parse_id_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads one identifier per line, trimming and dropping blank lines.
pub fn read_id_file(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        bail!("input file {} does not exist", path.display());
    }
    if !path.is_file() {
        bail!("input path {} is not a file", path.display());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read identifiers from {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect())
}

/// Resolves the identifiers given with `-i` or `-f`; exactly one must be set.
pub fn load_ids(input: Option<&str>, from_file: Option<&Path>) -> Result<Vec<String>> {
    let ids = match (input, from_file) {
        (Some(_), Some(_)) => bail!("provide either --input or --from-file, not both"),
        (None, None) => bail!("no input provided; use --input or --from-file"),
        (Some(value), None) => parse_id_list(value),
        (None, Some(path)) => {
            info!(path = %path.display(), "reading identifiers from file");
            read_id_file(path)?
        }
    };
    if ids.is_empty() {
        bail!("no identifiers found in the input");
    }
    Ok(ids)
}

/// Parses `--exclude-files`: the path of an existing `.txt` file with one
/// name per line, or else a comma-separated list of names.
pub fn parse_exclude_files(value: &str) -> Result<Vec<String>> {
    let path = Path::new(value);
    let is_txt = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if is_txt && path.is_file() {
        info!(path = %path.display(), "reading excluded file names");
        return read_id_file(path);
    }
    Ok(parse_id_list(value))
}
