//! Rewrite phase: apply confirmed replacements and write files back

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::error::{ReplaceError, ReplaceResult};
use super::scanner::LoadedFile;
use crate::utils::{print_info, print_success};

/// Confirmed character substitutions, iterated in ascending code point order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementMap {
    entries: BTreeMap<char, String>,
}

impl ReplacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a confirmed replacement. A later call for the same character wins.
    pub fn insert(&mut self, from: char, to: impl Into<String>) {
        self.entries.insert(from, to.into());
    }

    pub fn get(&self, from: char) -> Option<&str> {
        self.entries.get(&from).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|(c, r)| (*c, r.as_str()))
    }
}

impl FromIterator<(char, String)> for ReplacementMap {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// What happened to a file during the rewrite phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed and was written back.
    Updated { replacements: usize },
    /// Content was already free of mapped characters.
    Unchanged,
}

/// Apply every mapping entry in turn to the evolving text, counting hits.
///
/// Each pass sees the output of the previous one, so a replacement string
/// containing a later key is itself rewritten, and those hits are counted too.
pub fn replace_counting(text: &str, map: &ReplacementMap) -> (String, usize) {
    let mut out = text.to_string();
    let mut total = 0;
    for (from, to) in map.iter() {
        let hits = out.matches(from).count();
        if hits > 0 {
            total += hits;
            out = out.replace(from, to);
        }
    }
    (out, total)
}

/// Apply every mapping entry in turn to the evolving text.
pub fn apply_replacements(text: &str, map: &ReplacementMap) -> String {
    replace_counting(text, map).0
}

/// Rewrite one file in place if the mapping changes it.
pub fn process_file(file: &LoadedFile, map: &ReplacementMap) -> ReplaceResult<FileOutcome> {
    let (new_content, replacements) = replace_counting(&file.content, map);

    if new_content == file.content {
        print_info(&format!("No changes needed: {}", file.path.display()));
        return Ok(FileOutcome::Unchanged);
    }

    std::fs::write(&file.path, &new_content).map_err(|source| ReplaceError::Write {
        path: file.path.clone(),
        source,
    })?;
    print_success(&format!("Updated: {}", file.path.display()));

    Ok(FileOutcome::Updated { replacements })
}

/// Process every loaded file in order, stopping at the first write failure.
///
/// Files written before a failure keep their new content.
pub fn rewrite_files(
    files: &[LoadedFile],
    map: &ReplacementMap,
) -> ReplaceResult<Vec<(PathBuf, FileOutcome)>> {
    files
        .iter()
        .map(|file| process_file(file, map).map(|outcome| (file.path.clone(), outcome)))
        .collect()
}
