//! Tests for applying replacements and rewriting files

mod common;

use tempfile::TempDir;
use unirep::pipeline::{
    apply_replacements, load_file, process_file, rewrite_files, scan_files, FileOutcome,
    LoadedFile, ReplaceError, ReplacementMap,
};

fn map_of(entries: &[(char, &str)]) -> ReplacementMap {
    entries
        .iter()
        .map(|(c, r)| (*c, r.to_string()))
        .collect()
}

#[test]
fn test_apply_simple_replacement() {
    let map = map_of(&[('é', "e")]);
    assert_eq!(apply_replacements("café", &map), "cafe");
}

#[test]
fn test_apply_replaces_every_occurrence() {
    let map = map_of(&[('—', "--"), ('é', "e")]);
    assert_eq!(
        apply_replacements("été — éé — x", &map),
        "ete -- ee -- x"
    );
}

#[test]
fn test_apply_empty_map_is_identity() {
    let map = ReplacementMap::new();
    let text = "naïve café — 😀";
    assert_eq!(apply_replacements(text, &map), text);
}

#[test]
fn test_apply_cascades_through_later_keys() {
    // α (U+03B1) is applied before β (U+03B2); the β it produces is rewritten too
    let map = map_of(&[('α', "β"), ('β', "γ")]);
    assert_eq!(apply_replacements("α", &map), "γ");
}

#[test]
fn test_apply_does_not_cascade_backwards() {
    // β's replacement introduces α after α has already been processed
    let map = map_of(&[('α', "a"), ('β', "α")]);
    assert_eq!(apply_replacements("αβ", &map), "aα");
}

#[test]
fn test_apply_replacement_to_empty_string_removes_char() {
    let map = map_of(&[('\u{200B}', "")]);
    assert_eq!(apply_replacements("zero\u{200B}width", &map), "zerowidth");
}

#[test]
fn test_process_file_writes_changes() {
    let dir = TempDir::new().unwrap();
    let path = common::write_file(&dir, "a.txt", "café crème\n");
    let file = load_file(&path).unwrap();
    let map = map_of(&[('é', "e"), ('è', "e")]);

    let outcome = process_file(&file, &map).unwrap();

    assert_eq!(outcome, FileOutcome::Updated { replacements: 2 });
    assert_eq!(common::read_file(&path), "cafe creme\n");
}

#[test]
fn test_process_file_empty_map_leaves_bytes_identical() {
    let dir = TempDir::new().unwrap();
    let original = "naïve\r\n— end";
    let path = common::write_file(&dir, "a.txt", original);
    let file = load_file(&path).unwrap();
    let before = std::fs::metadata(&path).unwrap().modified().unwrap();

    let outcome = process_file(&file, &ReplacementMap::new()).unwrap();

    assert_eq!(outcome, FileOutcome::Unchanged);
    assert_eq!(std::fs::read(&path).unwrap(), original.as_bytes());
    assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), before);
}

#[test]
fn test_process_file_unrelated_mapping_is_unchanged() {
    let dir = TempDir::new().unwrap();
    let path = common::write_file(&dir, "a.txt", "plain text");
    let file = load_file(&path).unwrap();

    let outcome = process_file(&file, &map_of(&[('é', "e")])).unwrap();

    assert_eq!(outcome, FileOutcome::Unchanged);
}

#[test]
fn test_process_file_uses_scanned_content() {
    let dir = TempDir::new().unwrap();
    let path = common::write_file(&dir, "a.txt", "é");
    let file = LoadedFile {
        path: path.clone(),
        content: "ü".to_string(),
    };

    process_file(&file, &map_of(&[('ü', "u")])).unwrap();

    assert_eq!(common::read_file(&path), "u");
}

#[test]
fn test_process_file_write_failure() {
    let dir = TempDir::new().unwrap();
    let file = LoadedFile {
        path: dir.path().join("gone").join("a.txt"),
        content: "é".to_string(),
    };

    let err = process_file(&file, &map_of(&[('é', "e")])).unwrap_err();

    assert!(matches!(err, ReplaceError::Write { .. }));
}

#[test]
fn test_rewrite_files_skips_missing_and_keeps_order() {
    let dir = TempDir::new().unwrap();
    let a = common::write_file(&dir, "a.txt", "ascii only\n");
    let b = common::write_file(&dir, "b.txt", "naïve\n");
    let missing = dir.path().join("missing.txt");

    let scan = scan_files(&[a.clone(), missing.clone(), b.clone()]).unwrap();
    let outcomes = rewrite_files(&scan.files, &map_of(&[('ï', "i")])).unwrap();

    assert_eq!(
        outcomes,
        vec![
            (a.clone(), FileOutcome::Unchanged),
            (b.clone(), FileOutcome::Updated { replacements: 1 }),
        ]
    );
    assert!(outcomes.iter().all(|(path, _)| *path != missing));
    assert_eq!(common::read_file(&a), "ascii only\n");
    assert_eq!(common::read_file(&b), "naive\n");
}

#[test]
fn test_rewrite_files_stops_at_first_failure() {
    let dir = TempDir::new().unwrap();
    let good = common::write_file(&dir, "good.txt", "é");
    let files = vec![
        load_file(&good).unwrap(),
        LoadedFile {
            path: dir.path().join("no_such_dir").join("bad.txt"),
            content: "é".to_string(),
        },
    ];

    let result = rewrite_files(&files, &map_of(&[('é', "e")]));

    assert!(result.is_err());
    // no rollback: the earlier write stays
    assert_eq!(common::read_file(&good), "e");
}

#[test]
fn test_process_file_counts_cascaded_hits() {
    let dir = TempDir::new().unwrap();
    let path = common::write_file(&dir, "greek.txt", "αβ");
    let file = load_file(&path).unwrap();

    let outcome = process_file(&file, &map_of(&[('α', "β"), ('β', "γ")])).unwrap();

    // α once, then both βs in the second pass
    assert_eq!(outcome, FileOutcome::Updated { replacements: 3 });
    assert_eq!(common::read_file(&path), "γγ");
}
