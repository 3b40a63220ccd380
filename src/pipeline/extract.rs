//! Sentinel-bounded segment extraction
//!
//! Task exports are loosely structured: the rows of interest sit between
//! literal marker rows in the section column, not at fixed offsets. This
//! module locates those markers and slices out the segment between them.

use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Whether the end-marker row itself belongs to the extracted segment.
///
/// The start-marker row is never included; batteries only disagree about
/// the end boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndBoundary {
    /// Keep the end-marker row as the last row of the segment
    Inclusive,
    /// Stop at the row before the end marker
    Exclusive,
}

/// Marker pair delimiting one task segment inside an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentBounds {
    pub start_marker: String,
    pub end_marker: String,
    pub end_boundary: EndBoundary,
}

impl SegmentBounds {
    pub fn new(start_marker: &str, end_marker: &str, end_boundary: EndBoundary) -> Self {
        Self {
            start_marker: start_marker.to_string(),
            end_marker: end_marker.to_string(),
            end_boundary,
        }
    }
}

/// Extract the sub-table delimited by `bounds` in the section column.
///
/// Only the first occurrence of each marker counts; later duplicates are
/// ignored. Returns `Ok(None)` when either marker is absent or the end
/// marker precedes the start marker - an expected outcome for incomplete
/// exports, not an error. A zero-length span between adjacent markers is a
/// valid empty segment. Row order is preserved, which assumes the export
/// rows arrive in chronological order.
pub fn extract_segment(
    df: &DataFrame,
    section_column: &str,
    bounds: &SegmentBounds,
) -> Result<Option<DataFrame>> {
    let section = df
        .column(section_column)
        .with_context(|| format!("Section column '{}' not found", section_column))?
        .str()
        .with_context(|| format!("Section column '{}' is not textual", section_column))?;

    let mut start_idx: Option<usize> = None;
    let mut end_idx: Option<usize> = None;
    for (idx, value) in section.into_iter().enumerate() {
        let Some(value) = value else { continue };
        if start_idx.is_none() && value == bounds.start_marker {
            start_idx = Some(idx);
        }
        if end_idx.is_none() && value == bounds.end_marker {
            end_idx = Some(idx);
        }
        if start_idx.is_some() && end_idx.is_some() {
            break;
        }
    }

    let (Some(start), Some(end)) = (start_idx, end_idx) else {
        return Ok(None);
    };

    let first = start + 1;
    let limit = match bounds.end_boundary {
        EndBoundary::Inclusive => end + 1,
        EndBoundary::Exclusive => end,
    };
    if limit < first {
        return Ok(None);
    }

    Ok(Some(df.slice(first as i64, limit - first)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export() -> DataFrame {
        df! {
            "Section" => ["Intro", "Practice Success Screen", "Trial 1", "Trial 2", "Test:24 of 24 (Try #0)", "Debrief"],
            "SubjectID" => ["7", "7", "7", "7", "7", "7"],
        }
        .unwrap()
    }

    #[test]
    fn test_exclusive_end_stops_before_marker() {
        let bounds = SegmentBounds::new(
            "Practice Success Screen",
            "Test:24 of 24 (Try #0)",
            EndBoundary::Exclusive,
        );
        let segment = extract_segment(&export(), "Section", &bounds)
            .unwrap()
            .unwrap();

        let sections: Vec<Option<&str>> = segment
            .column("Section")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(sections, vec![Some("Trial 1"), Some("Trial 2")]);
    }

    #[test]
    fn test_inclusive_end_keeps_marker_row() {
        let bounds = SegmentBounds::new(
            "Practice Success Screen",
            "Test:24 of 24 (Try #0)",
            EndBoundary::Inclusive,
        );
        let segment = extract_segment(&export(), "Section", &bounds)
            .unwrap()
            .unwrap();

        assert_eq!(segment.height(), 3);
        let last = segment.column("Section").unwrap().str().unwrap().get(2);
        assert_eq!(last, Some("Test:24 of 24 (Try #0)"));
    }

    #[test]
    fn test_missing_start_marker_is_not_found() {
        let bounds = SegmentBounds::new("Nope", "Test:24 of 24 (Try #0)", EndBoundary::Exclusive);
        assert!(extract_segment(&export(), "Section", &bounds)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_missing_end_marker_is_not_found() {
        let bounds = SegmentBounds::new("Practice Success Screen", "Nope", EndBoundary::Exclusive);
        assert!(extract_segment(&export(), "Section", &bounds)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_end_before_start_is_not_found() {
        let bounds = SegmentBounds::new(
            "Test:24 of 24 (Try #0)",
            "Practice Success Screen",
            EndBoundary::Exclusive,
        );
        assert!(extract_segment(&export(), "Section", &bounds)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_adjacent_markers_yield_empty_segment() {
        let df = df! {
            "Section" => ["start", "end"],
            "SubjectID" => ["1", "1"],
        }
        .unwrap();
        let bounds = SegmentBounds::new("start", "end", EndBoundary::Exclusive);
        let segment = extract_segment(&df, "Section", &bounds).unwrap().unwrap();
        assert_eq!(segment.height(), 0);
    }

    #[test]
    fn test_only_first_marker_occurrence_counts() {
        let df = df! {
            "Section" => ["start", "a", "end", "start", "b", "end"],
            "SubjectID" => ["1", "1", "1", "1", "1", "1"],
        }
        .unwrap();
        let bounds = SegmentBounds::new("start", "end", EndBoundary::Exclusive);
        let segment = extract_segment(&df, "Section", &bounds).unwrap().unwrap();

        assert_eq!(segment.height(), 1);
        let only = segment.column("Section").unwrap().str().unwrap().get(0);
        assert_eq!(only, Some("a"));
    }

    #[test]
    fn test_null_sections_are_skipped() {
        let df = df! {
            "Section" => [None, Some("start"), Some("x"), None, Some("end")],
            "SubjectID" => ["1", "1", "1", "1", "1"],
        }
        .unwrap();
        let bounds = SegmentBounds::new("start", "end", EndBoundary::Exclusive);
        let segment = extract_segment(&df, "Section", &bounds).unwrap().unwrap();
        assert_eq!(segment.height(), 2);
    }

    #[test]
    fn test_missing_section_column_is_an_error() {
        let df = df! { "Other" => ["a"] }.unwrap();
        let bounds = SegmentBounds::new("start", "end", EndBoundary::Exclusive);
        assert!(extract_segment(&df, "Section", &bounds).is_err());
    }
}
