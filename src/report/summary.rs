//! Character inventory and run summary tables

use std::collections::BTreeMap;
use std::path::PathBuf;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{unicode_codepoint, CharStats, FileOutcome};

/// Build the table of characters found during the scan.
pub fn char_table(chars: &BTreeMap<char, CharStats>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Char").add_attribute(Attribute::Bold),
        Cell::new("Code Point").add_attribute(Attribute::Bold),
        Cell::new("Occurrences").add_attribute(Attribute::Bold),
        Cell::new("Files").add_attribute(Attribute::Bold),
    ]);

    for (c, stats) in chars {
        table.add_row(vec![
            Cell::new(c).fg(Color::Magenta),
            Cell::new(unicode_codepoint(*c)),
            Cell::new(stats.occurrences),
            Cell::new(stats.files),
        ]);
    }

    table
}

/// Print the character inventory, indented like the rest of the output.
pub fn display_char_table(chars: &BTreeMap<char, CharStats>) {
    for line in char_table(chars).to_string().lines() {
        println!("    {}", line);
    }
    println!();
}

/// Outcome of a whole run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_missing: usize,
    pub chars_found: usize,
    pub chars_mapped: usize,
    pub outcomes: Vec<(PathBuf, FileOutcome)>,
}

impl RunSummary {
    pub fn new(files_scanned: usize, files_missing: usize, chars_found: usize) -> Self {
        Self {
            files_scanned,
            files_missing,
            chars_found,
            ..Default::default()
        }
    }

    pub fn set_chars_mapped(&mut self, count: usize) {
        self.chars_mapped = count;
    }

    pub fn add_outcomes(&mut self, outcomes: Vec<(PathBuf, FileOutcome)>) {
        self.outcomes = outcomes;
    }

    pub fn updated_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, FileOutcome::Updated { .. }))
            .count()
    }

    pub fn total_replacements(&self) -> usize {
        self.outcomes
            .iter()
            .map(|(_, outcome)| match outcome {
                FileOutcome::Updated { replacements } => *replacements,
                FileOutcome::Unchanged => 0,
            })
            .sum()
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("Files Scanned"), Cell::new(self.files_scanned)]);
        table.add_row(vec![
            Cell::new("Files Not Found"),
            Cell::new(self.files_missing).fg(if self.files_missing == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);
        table.add_row(vec![Cell::new("Unique Characters"), Cell::new(self.chars_found)]);
        table.add_row(vec![Cell::new("Replacements Confirmed"), Cell::new(self.chars_mapped)]);
        table.add_row(vec![
            Cell::new("Characters Replaced"),
            Cell::new(self.total_replacements()),
        ]);
        table.add_row(vec![
            Cell::new("Files Updated"),
            Cell::new(self.updated_count())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!("    {}", style("SUMMARY").white().bold());
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        for line in self.table().to_string().lines() {
            println!("    {}", line);
        }

        if self.updated_count() > 0 {
            println!();
            for (path, outcome) in &self.outcomes {
                if let FileOutcome::Updated { replacements } = outcome {
                    println!(
                        "      {} {} {}",
                        style("•").dim(),
                        path.display(),
                        style(format!("({} replaced)", replacements)).dim()
                    );
                }
            }
        }
    }
}
