//! Section label consolidation
//!
//! Export section labels carry per-trial suffixes (`Egocentric_Trial_3`,
//! `PathSurvey 2 shown`, ...). Analysis wants one canonical phase name per
//! trial, so labels are rewritten by substring match against the battery's
//! vocabulary. Instructional and time-out rows are dropped outright.

use anyhow::{Context, Result};
use polars::prelude::*;

/// Rewrite section values to the first vocabulary entry they contain.
///
/// Vocabulary order decides ties: the first entry that matches wins. Values
/// matching no entry, and null values, pass through unchanged. An empty
/// vocabulary leaves the table untouched.
pub fn consolidate_sections(
    df: &DataFrame,
    section_column: &str,
    vocabulary: &[String],
) -> Result<DataFrame> {
    if vocabulary.is_empty() || df.height() == 0 {
        return Ok(df.clone());
    }

    let section = df
        .column(section_column)
        .with_context(|| format!("Section column '{}' not found", section_column))?
        .str()
        .with_context(|| format!("Section column '{}' is not textual", section_column))?;

    let rewritten: StringChunked = section
        .into_iter()
        .map(|value| {
            value.map(|v| {
                vocabulary
                    .iter()
                    .find(|canonical| v.contains(canonical.as_str()))
                    .map(|canonical| canonical.as_str())
                    .unwrap_or(v)
            })
        })
        .collect();

    let mut out = df.clone();
    out.with_column(rewritten.into_series().with_name(section_column.into()))?;
    Ok(out)
}

/// Drop rows whose section value contains `pattern` (case-sensitive).
///
/// Rows with a null section value are kept.
pub fn drop_sections_containing(
    df: &DataFrame,
    section_column: &str,
    pattern: &str,
) -> Result<DataFrame> {
    if df.height() == 0 {
        return Ok(df.clone());
    }

    let section = df
        .column(section_column)
        .with_context(|| format!("Section column '{}' not found", section_column))?
        .str()
        .with_context(|| format!("Section column '{}' is not textual", section_column))?;

    let keep: BooleanChunked = section
        .into_iter()
        .map(|value| !value.is_some_and(|v| v.contains(pattern)))
        .collect();

    Ok(df.filter(&keep)?)
}
