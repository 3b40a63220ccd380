//! Cogprep: Cognitive Task Export Preprocessing
//!
//! A library for merging per-subject behavioral-task exports into one
//! cleaned dataset per task battery, with cohort tagging and an exclusion
//! report for files that could not be processed.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
