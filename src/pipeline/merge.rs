//! Batch merge across export files
//!
//! One pass over the file set: load, extract, stack. Anything that goes
//! wrong with a single file lands in the exclusion list and the batch keeps
//! going - an incomplete export from one subject never costs the run.

use std::path::{Path, PathBuf};

use polars::prelude::*;
use thiserror::Error;

use super::battery::BatteryConfig;
use super::extract::extract_segment;
use super::loader::load_export;
use crate::utils::create_progress_bar;

/// Why a file was left out of the merged dataset
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("failed to load: {0}")]
    Load(String),
    #[error("segment markers not found")]
    BoundaryNotFound,
    #[error("columns do not match earlier files: {0}")]
    SchemaMismatch(String),
}

/// One entry of the exclusion report
#[derive(Debug)]
pub struct ExcludedFile {
    pub filename: String,
    pub reason: SkipReason,
}

impl ExcludedFile {
    fn new(path: &Path, reason: SkipReason) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { filename, reason }
    }
}

/// Merge the extracted segment of every export into one table.
///
/// Files are processed in the order given and successful slices are stacked
/// in that order; no deduplication happens here. Per-file failures are
/// recorded and recovered, never propagated. `None` means no file survived
/// - a valid outcome for an empty or fully malformed batch.
pub fn merge_exports(
    files: &[PathBuf],
    config: &BatteryConfig,
) -> (Option<DataFrame>, Vec<ExcludedFile>) {
    let mut merged: Option<DataFrame> = None;
    let mut excluded = Vec::new();

    let pb = create_progress_bar(files.len() as u64, "      Merging");
    for path in files {
        pb.inc(1);

        let table = match load_export(path) {
            Ok(table) => table,
            Err(err) => {
                excluded.push(ExcludedFile::new(path, SkipReason::Load(format!("{err:#}"))));
                continue;
            }
        };

        let slice = match &config.bounds {
            None => table,
            Some(bounds) => match extract_segment(&table, &config.section_column, bounds) {
                Ok(Some(segment)) => segment,
                Ok(None) => {
                    excluded.push(ExcludedFile::new(path, SkipReason::BoundaryNotFound));
                    continue;
                }
                Err(err) => {
                    excluded.push(ExcludedFile::new(path, SkipReason::Load(format!("{err:#}"))));
                    continue;
                }
            },
        };

        match &mut merged {
            None => merged = Some(slice),
            Some(accumulated) => match accumulated.vstack(&slice) {
                Ok(stacked) => *accumulated = stacked,
                Err(err) => {
                    excluded.push(ExcludedFile::new(
                        path,
                        SkipReason::SchemaMismatch(err.to_string()),
                    ));
                }
            },
        }
    }
    pb.finish_and_clear();

    (merged, excluded)
}
