//! End-of-run summary

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::CohortTally;

/// Summary of one preprocessing run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub battery: String,
    pub files_found: usize,
    pub files_excluded: usize,
    pub rows: usize,
    pub tally: CohortTally,
}

impl RunSummary {
    pub fn new(battery: &str, files_found: usize) -> Self {
        Self {
            battery: battery.to_string(),
            files_found,
            ..Default::default()
        }
    }

    pub fn files_merged(&self) -> usize {
        self.files_found - self.files_excluded
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("RUN SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📂 Files found"),
            Cell::new(self.files_found),
        ]);

        table.add_row(vec![
            Cell::new("✅ Files merged"),
            Cell::new(self.files_merged()).fg(Color::Green),
        ]);

        table.add_row(vec![
            Cell::new("🗑️  Files excluded"),
            Cell::new(self.files_excluded).fg(if self.files_excluded == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![Cell::new("📄 Rows in dataset"), Cell::new(self.rows)]);

        table.add_row(vec![
            Cell::new("🧍 Unique subjects"),
            Cell::new(self.tally.unique_subjects())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        println!();
        println!(
            "    {} {}",
            style("🧠").cyan(),
            style("COHORT COUNTS").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut cohorts = Table::new();
        cohorts.load_preset(UTF8_FULL_CONDENSED);
        cohorts.set_header(vec![
            Cell::new("Cohort").add_attribute(Attribute::Bold),
            Cell::new("Subjects").add_attribute(Attribute::Bold),
        ]);
        cohorts.add_row(vec![Cell::new("HV"), Cell::new(self.tally.hv)]);
        cohorts.add_row(vec![Cell::new("MDD"), Cell::new(self.tally.mdd)]);
        cohorts.add_row(vec![Cell::new("ANX"), Cell::new(self.tally.anx)]);

        for line in cohorts.to_string().lines() {
            println!("    {}", line);
        }
    }
}
