//! Shared test utilities and fixture generators

use polars::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use cogprep::pipeline::Battery;

/// One complete paired-association export for a single subject.
///
/// Rows between the practice-success and final-trial markers: two graded
/// test trials with a time-out warning screen between them.
pub fn paired_export(subject: &str) -> DataFrame {
    df! {
        "Section" => [
            "Instructions",
            "Practice Trial",
            "Practice Success Screen",
            "Test:1 of 24 (Try #0)",
            "Time Out Warning Screen",
            "Test:2 of 24 (Try #0)",
            "Test:24 of 24 (Try #0)",
            "Debrief",
        ],
        "SubjectID" => vec![subject; 8],
        "User Answer Correctness" => [
            None,
            Some("Correct"),
            None,
            Some("Correct"),
            None,
            Some("Incorrect"),
            Some("Correct"),
            None,
        ],
    }
    .unwrap()
}

/// One complete spatial-navigation export for a single subject.
///
/// Includes an instructional row inside the task segment (dropped by the
/// exclusion pattern even though it is graded) and trial rows whose labels
/// carry per-trial suffixes for the consolidation step.
pub fn spatial_export(subject: &str) -> DataFrame {
    let bounds = Battery::SpatialNavigation.config().bounds.unwrap();
    df! {
        "Section" => [
            "Introduction Screen",
            bounds.start_marker.as_str(),
            "LandmarkRecognition_Trial_1",
            "Egocentric_Trial_2",
            "Introduction to Path",
            "PathRoute shown 3",
            bounds.end_marker.as_str(),
            "scale question shown:2. Another question.",
        ],
        "SubjectID" => vec![subject; 8],
        "User Answer Correctness" => [
            None,
            None,
            Some("Correct"),
            Some("Incorrect"),
            Some("Correct"),
            Some("Correct"),
            None,
            None,
        ],
    }
    .unwrap()
}

/// An export that parses fine but carries none of the segment markers
pub fn markerless_export(subject: &str) -> DataFrame {
    df! {
        "Section" => ["Instructions", "Aborted"],
        "SubjectID" => vec![subject; 2],
        "User Answer Correctness" => [None::<&str>, None],
    }
    .unwrap()
}

/// Write a DataFrame as a CSV export into `dir`
pub fn write_export(dir: &Path, name: &str, df: &mut DataFrame) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();
    path
}

/// Write a roster file: subjects 37/69/23 are HV, 66/86 are MDD
pub fn write_rosters(dir: &Path) -> PathBuf {
    let path = dir.join("rosters.json");
    std::fs::write(&path, r#"{"hv": [37, 69, 23, 101], "mdd": [66, 86, 102]}"#).unwrap();
    path
}

/// Create a temp directory holding an empty export directory
pub fn export_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("exports");
    std::fs::create_dir(&data_dir).unwrap();
    (temp_dir, data_dir)
}

/// Read a String column into owned values for assertions
pub fn column_values(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(|s| s.to_string()))
        .collect()
}
