//! Tests for field recoding and section label consolidation

mod common;

use cogprep::pipeline::{
    consolidate_sections, drop_missing, drop_sections_containing, recode_column, Battery,
};
use common::*;
use polars::prelude::*;

#[test]
fn test_correctness_recode_then_drop_missing() {
    let df = df! {
        "User Answer Correctness" => [Some("Correct"), Some("Incorrect"), Some("Correct"), None],
    }
    .unwrap();

    let recode = Battery::PairedAssociation.config().recode.unwrap();
    let recoded = recode_column(&df, &recode.column, &recode.mapping).unwrap();
    assert_eq!(
        column_values(&recoded, &recode.column),
        vec![
            Some("1".to_string()),
            Some("0".to_string()),
            Some("1".to_string()),
            None,
        ]
    );

    let graded = drop_missing(&recoded, &recode.column).unwrap();
    assert_eq!(graded.height(), 3);
}

#[test]
fn test_vocabulary_consolidation_on_trial_suffixes() {
    let config = Battery::SpatialNavigation.config();
    let df = df! {
        "Section" => [
            "Egocentric_Trial_3",
            "Allocentric_Trial_1",
            "LandmarkRecognition shown 2",
            "Practice",
        ],
    }
    .unwrap();

    let out = consolidate_sections(&df, &config.section_column, &config.section_vocabulary).unwrap();
    assert_eq!(
        column_values(&out, "Section"),
        vec![
            Some("Egocentric".to_string()),
            Some("Allocentric".to_string()),
            Some("LandmarkRecognition".to_string()),
            Some("Practice".to_string()),
        ]
    );
}

#[test]
fn test_instructional_rows_dropped_before_consolidation() {
    let config = Battery::SpatialNavigation.config();
    let df = df! {
        "Section" => ["Introduction to Path", "PathRoute shown 1", "Introduction Screen"],
    }
    .unwrap();

    let out = drop_sections_containing(
        &df,
        &config.section_column,
        config.drop_sections_containing.as_deref().unwrap(),
    )
    .unwrap();
    assert_eq!(
        column_values(&out, "Section"),
        vec![Some("PathRoute shown 1".to_string())]
    );
}

#[test]
fn test_cleaning_steps_handle_empty_table() {
    let config = Battery::SpatialNavigation.config();
    let recode = config.recode.as_ref().unwrap();
    let empty = df! {
        "Section" => Vec::<&str>::new(),
        "User Answer Correctness" => Vec::<&str>::new(),
    }
    .unwrap();

    let out = recode_column(&empty, &recode.column, &recode.mapping).unwrap();
    let out = drop_sections_containing(&out, &config.section_column, "Introduction").unwrap();
    let out = consolidate_sections(&out, &config.section_column, &config.section_vocabulary).unwrap();
    let out = drop_missing(&out, &recode.column).unwrap();

    assert_eq!(out.height(), 0);
}
