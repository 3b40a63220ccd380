//! Response field recoding
//!
//! Graded responses arrive as categorical text (`Correct` / `Incorrect`)
//! and leave as a 0/1 signal. Rows the platform never graded stay null and
//! are dropped afterwards.

use anyhow::{Context, Result};
use polars::prelude::*;

/// Replace values listed in `mapping` by their replacement.
///
/// Values not present as mapping keys pass through unchanged, so applying
/// the same mapping twice is a no-op for already-recoded values. Null
/// values stay null.
pub fn recode_column(
    df: &DataFrame,
    column: &str,
    mapping: &[(String, String)],
) -> Result<DataFrame> {
    if df.height() == 0 {
        return Ok(df.clone());
    }

    let values = df
        .column(column)
        .with_context(|| format!("Column '{}' not found", column))?
        .str()
        .with_context(|| format!("Column '{}' is not textual", column))?;

    let recoded: StringChunked = values
        .into_iter()
        .map(|value| {
            value.map(|v| {
                mapping
                    .iter()
                    .find(|(from, _)| from.as_str() == v)
                    .map(|(_, to)| to.as_str())
                    .unwrap_or(v)
            })
        })
        .collect();

    let mut out = df.clone();
    out.with_column(recoded.into_series().with_name(column.into()))?;
    Ok(out)
}

/// Drop rows where `column` is null
pub fn drop_missing(df: &DataFrame, column: &str) -> Result<DataFrame> {
    if df.height() == 0 {
        return Ok(df.clone());
    }

    let keep = df
        .column(column)
        .with_context(|| format!("Column '{}' not found", column))?
        .as_materialized_series()
        .is_not_null();

    Ok(df.filter(&keep)?)
}
