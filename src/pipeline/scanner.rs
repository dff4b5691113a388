//! Scan phase: load input files and collect their non-ASCII characters

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use super::error::{ReplaceError, ReplaceResult};
use crate::utils::{create_progress_bar, print_warning};

/// Highest code point that is left alone.
pub const ASCII_MAX: u32 = 127;

/// An input file held in memory between the scan and rewrite phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Where and how often a character was seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharStats {
    pub occurrences: usize,
    pub files: usize,
}

/// Everything the scan phase learned about the inputs.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Readable files in argument order.
    pub files: Vec<LoadedFile>,
    /// Paths that did not name an existing file.
    pub missing: Vec<PathBuf>,
    /// Non-ASCII characters across all files, ascending by code point.
    pub chars: BTreeMap<char, CharStats>,
}

impl ScanResult {
    /// The global character set in presentation order.
    pub fn unique_chars(&self) -> Vec<char> {
        self.chars.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Distinct characters above the ASCII range, sorted by code point.
pub fn get_unicode_chars(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| *c as u32 > ASCII_MAX)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Format a character's code point as `U+XXXX`.
///
/// At least four uppercase hex digits; wider code points use more.
pub fn unicode_codepoint(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

/// Read and decode a single file.
pub fn load_file(path: &Path) -> ReplaceResult<LoadedFile> {
    let bytes = std::fs::read(path).map_err(|source| ReplaceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|source| ReplaceError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(LoadedFile {
        path: path.to_path_buf(),
        content,
    })
}

/// Load every input and build the global character set.
///
/// Paths that are not regular files are reported as soon as they are met,
/// land in `missing`, and are otherwise ignored. A file named more than once,
/// even through different spellings of its path, is only loaded once.
pub fn scan_files(paths: &[PathBuf]) -> ReplaceResult<ScanResult> {
    let mut result = ScanResult::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    let pb = create_progress_bar(paths.len() as u64, "Scanning files");

    for path in paths {
        pb.inc(1);
        if !seen.insert(dedup_key(path)) {
            continue;
        }
        if !path.is_file() {
            pb.suspend(|| print_warning(&format!("File not found: {}", path.display())));
            result.missing.push(path.clone());
            continue;
        }

        let file = load_file(path)?;
        accumulate_chars(&mut result.chars, &file.content);
        result.files.push(file);
    }

    pb.finish_and_clear();

    Ok(result)
}

/// Identity of a path for duplicate detection.
///
/// Paths that cannot be resolved (usually missing ones) compare literally.
fn dedup_key(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Fold one file's characters into the running statistics.
fn accumulate_chars(stats: &mut BTreeMap<char, CharStats>, text: &str) {
    let mut in_this_file: HashSet<char> = HashSet::new();

    for c in text.chars().filter(|c| *c as u32 > ASCII_MAX) {
        let entry = stats.entry(c).or_default();
        entry.occurrences += 1;
        if in_this_file.insert(c) {
            entry.files += 1;
        }
    }
}
