//! Unirep: Unicode Replacement CLI Tool
//!
//! Finds non-ASCII characters across a set of text files and interactively
//! replaces them.

use anyhow::{Context, Result};
use clap::Parser;

use unirep::cli::{prompt_replacements, stdio_prompt, Cli};
use unirep::pipeline::{rewrite_files, scan_files};
use unirep::report::{display_char_table, RunSummary};
use unirep::utils::{print_banner, print_completion, print_count, print_info, print_section};

fn main() -> Result<()> {
    let cli = Cli::parse();

    print_banner(env!("CARGO_PKG_VERSION"));

    // Step 1: Scan every input
    let scan = scan_files(&cli.files).context("Failed to scan input files")?;

    if scan.is_empty() {
        print_info("No Unicode characters found.");
        return Ok(());
    }

    print_count("unique Unicode characters across files.", scan.chars.len());
    println!();
    display_char_table(&scan.chars);

    let mut summary = RunSummary::new(scan.files.len(), scan.missing.len(), scan.chars.len());

    // Step 2: Decide on a replacement per character
    let mut prompt = stdio_prompt();
    let replacements = prompt_replacements(&scan.unique_chars(), &mut prompt)
        .context("Prompting for replacements failed")?;
    summary.set_chars_mapped(replacements.len());

    // Step 3: Write changed files back
    print_section("Rewriting Files");
    let outcomes = rewrite_files(&scan.files, &replacements)
        .context("Rewriting files failed; earlier files may already be updated")?;
    summary.add_outcomes(outcomes);

    summary.display();
    print_completion(summary.updated_count());

    Ok(())
}
