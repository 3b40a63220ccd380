//! Cohort classification from membership rosters
//!
//! Subjects are tagged `HV` or `MDD` from site-specific rosters supplied at
//! runtime; everyone else falls into the residual `ANX` cohort. Rosters are
//! loaded from a JSON file so per-site membership changes never require a
//! rebuild.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Name of the cohort label column added to the merged dataset
pub const COHORT_COLUMN: &str = "Type";

/// Cohort label assigned to every subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cohort {
    Hv,
    Mdd,
    Anx,
}

impl Cohort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cohort::Hv => "HV",
            Cohort::Mdd => "MDD",
            Cohort::Anx => "ANX",
        }
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership rosters for the two enrolled cohorts.
///
/// The sets are expected to be disjoint; if an identifier appears in both,
/// HV wins because it is checked first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CohortRosters {
    pub hv: HashSet<i64>,
    pub mdd: HashSet<i64>,
}

impl CohortRosters {
    pub fn new(hv: impl IntoIterator<Item = i64>, mdd: impl IntoIterator<Item = i64>) -> Self {
        Self {
            hv: hv.into_iter().collect(),
            mdd: mdd.into_iter().collect(),
        }
    }

    /// Load rosters from a JSON file: `{"hv": [ids...], "mdd": [ids...]}`
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster file: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse roster file: {}", path.display()))
    }

    /// Classify a subject identifier. Total: identifiers in neither roster
    /// are the residual cohort.
    pub fn classify(&self, subject_id: i64) -> Cohort {
        if self.hv.contains(&subject_id) {
            Cohort::Hv
        } else if self.mdd.contains(&subject_id) {
            Cohort::Mdd
        } else {
            Cohort::Anx
        }
    }
}

/// Per-cohort counts of deduplicated subjects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CohortTally {
    pub hv: usize,
    pub mdd: usize,
    pub anx: usize,
}

impl CohortTally {
    pub fn unique_subjects(&self) -> usize {
        self.hv + self.mdd + self.anx
    }
}

/// Add the cohort label column, keyed on the subject column.
///
/// Subject identifiers that fail integer parsing classify as residual.
pub fn attach_cohorts(
    df: &DataFrame,
    subject_column: &str,
    rosters: &CohortRosters,
) -> Result<DataFrame> {
    let labels: StringChunked = subject_ids(df, subject_column)?
        .into_iter()
        .map(|id| Some(id.map_or(Cohort::Anx, |id| rosters.classify(id)).as_str()))
        .collect();

    let mut out = df.clone();
    out.with_column(labels.into_series().with_name(COHORT_COLUMN.into()))?;
    Ok(out)
}

/// Drop rows whose subject identifier is a known platform test session
pub fn drop_test_sessions(
    df: &DataFrame,
    subject_column: &str,
    test_session_ids: &[i64],
) -> Result<DataFrame> {
    if test_session_ids.is_empty() || df.height() == 0 {
        return Ok(df.clone());
    }

    let keep: BooleanChunked = subject_ids(df, subject_column)?
        .into_iter()
        .map(|id| !id.is_some_and(|id| test_session_ids.contains(&id)))
        .collect();

    Ok(df.filter(&keep)?)
}

/// Count subjects per cohort after deduplicating on the subject column.
///
/// Rows with an unparseable subject identifier are not counted.
pub fn cohort_tally(df: &DataFrame, subject_column: &str) -> Result<CohortTally> {
    let ids = subject_ids(df, subject_column)?;
    let labels = df
        .column(COHORT_COLUMN)
        .with_context(|| format!("Cohort column '{}' not found", COHORT_COLUMN))?
        .str()?;

    let mut seen = HashSet::new();
    let mut tally = CohortTally::default();
    for (id, label) in ids.into_iter().zip(labels.into_iter()) {
        let Some(id) = id else { continue };
        if !seen.insert(id) {
            continue;
        }
        match label {
            Some("HV") => tally.hv += 1,
            Some("MDD") => tally.mdd += 1,
            _ => tally.anx += 1,
        }
    }
    Ok(tally)
}

/// Parse the subject column to integers; unparseable entries become null
fn subject_ids(df: &DataFrame, subject_column: &str) -> Result<Vec<Option<i64>>> {
    let ids = df
        .column(subject_column)
        .with_context(|| format!("Subject column '{}' not found", subject_column))?
        .cast(&DataType::Int64)
        .with_context(|| format!("Subject column '{}' is not numeric", subject_column))?;
    Ok(ids.i64()?.into_iter().collect())
}
