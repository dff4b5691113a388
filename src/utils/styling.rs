//! Terminal styling utilities for console output

use console::{style, Emoji};

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static SEARCH: Emoji<'_, '_> = Emoji("🔎 ", "");
pub static PENCIL: Emoji<'_, '_> = Emoji("✏️  ", "");
pub static SPARKLES: Emoji<'_, '_> = Emoji("✨ ", ">> ");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("unirep").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!(
        "    {}",
        style("Find and replace non-ASCII characters").dim()
    );
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print a section header with styling
pub fn print_section(title: &str) {
    println!();
    println!("    {}", style(title).white().bold());
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {}{}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {}{}", WARN, style(message).yellow());
}

/// Print the note shown when a character is left alone
pub fn print_skipped() {
    println!("    {}", style("Skipped.").dim());
    println!();
}

/// Print the heading for a character about to be prompted
pub fn print_found_char(c: char, codepoint: &str) {
    println!(
        "{}Found character: '{}' ({})",
        SEARCH,
        style(c).magenta().bold(),
        style(codepoint).dim()
    );
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize) {
    println!(
        "    {}Found {} {}",
        PENCIL,
        style(count).yellow().bold(),
        description
    );
}

/// Print the final completion message
pub fn print_completion(updated: usize) {
    println!();
    let message = match updated {
        0 => "No files were modified.".to_string(),
        1 => "1 file updated.".to_string(),
        n => format!("{} files updated.", n),
    };
    println!("    {}{}", SPARKLES, style(message).green().bold());
    println!();
}
