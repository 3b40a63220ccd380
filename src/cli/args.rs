//! Command-line argument definitions using clap

use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::Battery;

/// Cogprep - merge, clean, and cohort-tag cognitive task battery exports
#[derive(Parser, Debug)]
#[command(name = "cogprep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Task battery preset to process
    #[arg(short, long, value_enum)]
    pub battery: Option<Battery>,

    /// Battery configuration file (JSON). Replaces the preset entirely;
    /// use it for a new site or task revision without rebuilding.
    #[arg(long, conflicts_with = "battery")]
    pub battery_config: Option<PathBuf>,

    /// Directory containing the per-subject export CSVs
    #[arg(short, long)]
    pub data_dir: PathBuf,

    /// Cohort roster file (JSON object with "hv" and "mdd" id lists)
    #[arg(short, long)]
    pub rosters: PathBuf,

    /// Output directory for the dated artifacts.
    /// Defaults to a 'preprocessed' directory inside the data directory.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Run date embedded in output filenames (MMDDYYYY).
    /// Defaults to today; set it explicitly for reproducible runs.
    #[arg(long, value_parser = validate_run_date)]
    pub run_date: Option<String>,
}

impl Cli {
    /// Get the output directory, deriving from the data directory if not
    /// explicitly provided.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("preprocessed"))
    }

    /// Get the run-date stamp for output filenames
    pub fn date_stamp(&self) -> String {
        self.run_date
            .clone()
            .unwrap_or_else(|| Local::now().format("%m%d%Y").to_string())
    }
}

/// Validator for the run_date parameter
fn validate_run_date(s: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(s, "%m%d%Y")
        .map(|_| s.to_string())
        .map_err(|_| format!("'{}' is not a valid MMDDYYYY date", s))
}
