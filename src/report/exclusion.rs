//! Exclusion report artifact
//!
//! Files that never made it into the merged dataset are written to their
//! own dated CSV so the operator can chase the missing subjects.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::pipeline::ExcludedFile;

/// Build the exclusion report table: one row per skipped file
pub fn exclusion_table(excluded: &[ExcludedFile]) -> Result<DataFrame> {
    let filenames: Vec<&str> = excluded.iter().map(|e| e.filename.as_str()).collect();
    let reasons: Vec<String> = excluded.iter().map(|e| e.reason.to_string()).collect();

    Ok(df! {
        "Filename" => filenames,
        "Reason" => reasons,
    }?)
}

/// Write the exclusion report to `path`. Written even when empty so every
/// run leaves a complete artifact pair.
pub fn write_exclusion_report(path: &Path, excluded: &[ExcludedFile]) -> Result<()> {
    let mut table = exclusion_table(excluded)?;
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create exclusion report: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut table)
        .with_context(|| format!("Failed to write exclusion report: {}", path.display()))?;
    Ok(())
}
