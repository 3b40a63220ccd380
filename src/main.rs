//! Cogprep: Cognitive Task Export Preprocessing CLI
//!
//! Merges per-subject task exports into one cleaned, cohort-tagged dataset
//! per battery, plus an exclusion report for files that could not be
//! processed.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use cogprep::cli::Cli;
use cogprep::pipeline::{
    attach_cohorts, cohort_tally, consolidate_sections, drop_missing, drop_sections_containing,
    drop_test_sessions, list_export_files, merge_exports, recode_column, BatteryConfig,
    CohortRosters,
};
use cogprep::report::{write_exclusion_report, RunSummary};
use cogprep::utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success, print_warning,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Battery behavior comes either from a built-in preset or a JSON file
    let config = match (&cli.battery, &cli.battery_config) {
        (_, Some(path)) => BatteryConfig::from_file(path)?,
        (Some(battery), None) => battery.config(),
        (None, None) => anyhow::bail!(
            "A battery is required. Use -b/--battery or provide --battery-config."
        ),
    };

    let date_stamp = cli.date_stamp();
    let output_dir = cli.output_dir();

    // Print styled banner
    print_banner(env!("CARGO_PKG_VERSION"));

    // Print configuration card
    print_config(
        &config.label,
        &cli.data_dir,
        &output_dir,
        &cli.rosters,
        &date_stamp,
    );

    let rosters = CohortRosters::from_file(&cli.rosters)?;

    // Step 1: List export files
    print_step_header(1, "Scan Data Directory");

    let step_start = Instant::now();
    let files = list_export_files(&cli.data_dir, &config.file_suffix)?;
    if files.is_empty() {
        print_info(&format!(
            "No '*{}' files in {}. Nothing to do.",
            config.file_suffix,
            cli.data_dir.display()
        ));
        return Ok(());
    }
    print_count(
        "export file(s)",
        files.len(),
        Some(&format!("(*{})", config.file_suffix)),
    );
    print_step_time(step_start.elapsed());

    // Output directory problems are fatal; per-file problems are not.
    // Created only after the scan so a missing data directory stays a
    // missing-directory error even when the output defaults inside it.
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    // Step 2: Merge task segments across files
    print_step_header(2, "Merge Task Segments");

    let step_start = Instant::now();
    let (merged, excluded) = merge_exports(&files, &config);

    let mut summary = RunSummary::new(&config.label, files.len());
    summary.files_excluded = excluded.len();

    if excluded.is_empty() {
        print_success("All files merged");
    } else {
        print_count("unprocessable file(s)", excluded.len(), None);
    }

    let excluded_path = output_dir.join(format!("{}_{}.csv", config.excluded_stem, date_stamp));
    write_exclusion_report(&excluded_path, &excluded)?;
    print_success(&format!(
        "Exclusion report saved to {}",
        excluded_path.display()
    ));
    print_step_time(step_start.elapsed());

    let Some(mut df) = merged else {
        print_warning("No file yielded a task segment - nothing to merge");
        summary.display();
        return Ok(());
    };

    println!("\n    {} Merged dataset:", style("✧").cyan());
    println!("      Rows: {}", df.height());
    println!("      Columns: {}", df.width());

    // Step 3: Clean and recode fields
    print_step_header(3, "Clean & Recode");

    let step_start = Instant::now();
    if let Some(recode) = &config.recode {
        df = recode_column(&df, &recode.column, &recode.mapping)?;
        print_success(&format!("Recoded '{}'", recode.column));
    }
    if let Some(pattern) = &config.drop_sections_containing {
        let before = df.height();
        df = drop_sections_containing(&df, &config.section_column, pattern)?;
        print_count(
            "section row(s) dropped",
            before - df.height(),
            Some(&format!("(containing '{}')", pattern)),
        );
    }
    if !config.section_vocabulary.is_empty() {
        df = consolidate_sections(&df, &config.section_column, &config.section_vocabulary)?;
        print_success("Consolidated section labels");
    }
    if !config.test_session_ids.is_empty() {
        let before = df.height();
        df = drop_test_sessions(&df, &config.subject_column, &config.test_session_ids)?;
        print_count("test-session row(s) dropped", before - df.height(), None);
    }
    print_step_time(step_start.elapsed());

    // Step 4: Cohort classification
    print_step_header(4, "Cohort Classification");

    let step_start = Instant::now();
    df = attach_cohorts(&df, &config.subject_column, &rosters)?;
    print_success("Cohort labels attached");

    if let Some(recode) = &config.recode {
        let before = df.height();
        df = drop_missing(&df, &recode.column)?;
        print_count("ungraded row(s) dropped", before - df.height(), None);
    }

    summary.rows = df.height();
    summary.tally = cohort_tally(&df, &config.subject_column)?;
    print_step_time(step_start.elapsed());

    // Step 5: Save output
    print_step_header(5, "Save Results");

    let step_start = Instant::now();
    let spinner = create_spinner("Writing merged dataset...");
    let output_path = output_dir.join(format!("{}_{}.csv", config.output_stem, date_stamp));
    save_dataset(&mut df, &output_path)?;
    finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));
    print_step_time(step_start.elapsed());

    // Display summary
    summary.display();

    // Final completion message
    print_completion(&config.label);

    Ok(())
}

/// Save the merged dataset to a CSV file
fn save_dataset(df: &mut polars::prelude::DataFrame, path: &Path) -> Result<()> {
    use polars::prelude::*;

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(df)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;

    Ok(())
}
