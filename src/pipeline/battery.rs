//! Per-battery pipeline configuration
//!
//! Every behavioral difference between the task batteries lives here:
//! segment markers, end-boundary policy, recode mapping, section
//! vocabulary, exclusion pattern, and output naming. The pipeline itself is
//! battery-agnostic. Presets cover the three deployed batteries; a JSON
//! file can override any preset field for a new site or task revision.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::extract::{EndBoundary, SegmentBounds};

/// Built-in task battery presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Battery {
    /// Spatial navigation task (landmark/path/ego-allocentric phases)
    SpatialNavigation,
    /// Paired association memory task
    PairedAssociation,
    /// NIH Toolbox score exports
    NihToolbox,
}

/// Value mapping applied to one column of the merged dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecodeSpec {
    pub column: String,
    pub mapping: Vec<(String, String)>,
}

impl RecodeSpec {
    /// Correct/Incorrect grading recoded to a 1/0 signal
    pub fn correctness(column: &str) -> Self {
        Self {
            column: column.to_string(),
            mapping: vec![
                ("Correct".to_string(), "1".to_string()),
                ("Incorrect".to_string(), "0".to_string()),
            ],
        }
    }
}

/// Complete configuration for one battery's pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryConfig {
    /// Human-readable battery name for console output
    pub label: String,
    /// Filename suffix selecting this battery's exports in the data directory
    pub file_suffix: String,
    /// Column holding the subject identifier
    pub subject_column: String,
    /// Column holding the task-phase marker
    pub section_column: String,
    /// Segment markers; `None` concatenates whole files
    #[serde(default)]
    pub bounds: Option<SegmentBounds>,
    /// Recode applied to the graded-response column; rows left null in that
    /// column afterwards are dropped
    #[serde(default)]
    pub recode: Option<RecodeSpec>,
    /// Canonical phase names, in match-priority order
    #[serde(default)]
    pub section_vocabulary: Vec<String>,
    /// Rows whose section value contains this pattern are dropped
    #[serde(default)]
    pub drop_sections_containing: Option<String>,
    /// Platform test-session identifiers to strip from the merged data
    #[serde(default)]
    pub test_session_ids: Vec<i64>,
    /// Filename stem of the merged dataset artifact
    pub output_stem: String,
    /// Filename stem of the exclusion report artifact
    pub excluded_stem: String,
}

impl Battery {
    pub fn config(&self) -> BatteryConfig {
        match self {
            Battery::SpatialNavigation => BatteryConfig {
                label: "Spatial Navigation".to_string(),
                file_suffix: ".csv".to_string(),
                subject_column: "SubjectID".to_string(),
                section_column: "Section".to_string(),
                bounds: Some(SegmentBounds::new(
                    "Video Play: Version1",
                    "scale question shown:1. When I'm in a building I've never been to \
                     before, I can point effortlessly in the direction of the building's \
                     main entrance.",
                    EndBoundary::Exclusive,
                )),
                recode: Some(RecodeSpec::correctness("User Answer Correctness")),
                section_vocabulary: [
                    "LandmarkRecognition",
                    "PathSurvey",
                    "PathRoute",
                    "Egocentric",
                    "Allocentric",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
                drop_sections_containing: Some("Introduction".to_string()),
                test_session_ids: Vec::new(),
                output_stem: "SpatialNavigation".to_string(),
                excluded_stem: "SN_excluded".to_string(),
            },
            Battery::PairedAssociation => BatteryConfig {
                label: "Paired Association".to_string(),
                file_suffix: ".csv".to_string(),
                subject_column: "SubjectID".to_string(),
                section_column: "Section".to_string(),
                bounds: Some(SegmentBounds::new(
                    "Practice Success Screen",
                    "Test:24 of 24 (Try #0)",
                    EndBoundary::Exclusive,
                )),
                recode: Some(RecodeSpec::correctness("User Answer Correctness")),
                section_vocabulary: Vec::new(),
                drop_sections_containing: Some("Time Out Warning Screen".to_string()),
                test_session_ids: Vec::new(),
                output_stem: "PairedAssociation".to_string(),
                excluded_stem: "PA_excluded".to_string(),
            },
            Battery::NihToolbox => BatteryConfig {
                label: "NIH Toolbox".to_string(),
                file_suffix: "Scores.csv".to_string(),
                subject_column: "PIN".to_string(),
                section_column: "Section".to_string(),
                bounds: None,
                recode: None,
                section_vocabulary: Vec::new(),
                drop_sections_containing: None,
                test_session_ids: vec![11111, 99999],
                output_stem: "NIH_TB_data".to_string(),
                excluded_stem: "NIH_excluded".to_string(),
            },
        }
    }
}

impl BatteryConfig {
    /// Load a battery configuration from a JSON file, overriding any preset
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read battery config: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse battery config: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_agree_on_graded_batteries() {
        for battery in [Battery::SpatialNavigation, Battery::PairedAssociation] {
            let config = battery.config();
            assert!(config.bounds.is_some());
            let recode = config.recode.expect("graded battery recodes correctness");
            assert_eq!(recode.column, "User Answer Correctness");
        }
    }

    #[test]
    fn test_nih_preset_concatenates_whole_files() {
        let config = Battery::NihToolbox.config();
        assert!(config.bounds.is_none());
        assert!(config.recode.is_none());
        assert_eq!(config.test_session_ids, vec![11111, 99999]);
        assert_eq!(config.file_suffix, "Scores.csv");
    }

    #[test]
    fn test_presets_round_trip_through_json() {
        for battery in [
            Battery::SpatialNavigation,
            Battery::PairedAssociation,
            Battery::NihToolbox,
        ] {
            let config = battery.config();
            let json = serde_json::to_string(&config).unwrap();
            let parsed: BatteryConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, config);
        }
    }
}
