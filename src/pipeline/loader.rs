//! Export file listing and CSV loading

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// List export files in `dir` whose names end with `suffix`.
///
/// An unreadable directory is fatal. Matches are sorted by filename so the
/// merge order, and with it the merged output, is deterministic across
/// platforms.
pub fn list_export_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read data directory: {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read data directory: {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.ends_with(suffix) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load one export file as an all-String DataFrame.
///
/// Schema inference is disabled on purpose: a column that is all-null in
/// one export and numeric in another would otherwise stack with a dtype
/// conflict, and every field the pipeline touches is matched as text
/// anyway. Empty CSV fields come back as nulls.
pub fn load_export(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to parse CSV file: {}", path.display()))
}
