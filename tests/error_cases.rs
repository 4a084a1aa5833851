mod common;

use std::fs;

use common::write_lines;
use icsv::{
    core::{LAST_ROW, table::Table},
    error::TableError,
    item::delimited::incremental_writer::{IncrementalWriter, IncrementalWriterBuilder},
};
use tempfile::TempDir;

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.csv");

    let result = Table::from_file(&path, None, ",", true);
    assert!(matches!(result, Err(TableError::NotFound(p)) if p == path));
}

#[test]
fn schema_must_be_determinable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    write_lines(&path, None, &["1,2"], ",");

    let result = Table::from_file(&path, None, ",", false);
    assert!(matches!(result, Err(TableError::SchemaUnknown)));
}

#[test]
fn schema_check_comes_after_existence_check() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.csv");

    let result = Table::from_file(&path, None, ",", false);
    assert!(matches!(result, Err(TableError::NotFound(_))));
}

#[test]
fn existing_file_is_kept_when_overwrite_is_disabled() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test.csv");
    fs::write(&path, "precious\n").unwrap();

    let result = IncrementalWriterBuilder::new()
        .delimiter("/")
        .overwrite(false)
        .from_path(&path, ["five", "6", "onetwo"]);
    assert!(matches!(result, Err(TableError::AlreadyExists(_))));

    let mut table = Table::new(["a"]);
    table.insert_row(["x"]).unwrap();
    let result = table.write(&path, true, false);
    assert!(matches!(result, Err(TableError::AlreadyExists(_))));

    assert_eq!(fs::read_to_string(&path).unwrap(), "precious\n");
}

#[test]
fn invalid_indices_are_rejected() {
    let mut table = Table::new(["a", "b"]);

    assert!(matches!(
        table.get_row(LAST_ROW),
        Err(TableError::InvalidIndex { index: -1, len: 0 })
    ));
    assert!(matches!(
        table.remove_row(LAST_ROW),
        Err(TableError::InvalidIndex { .. })
    ));

    table.insert_row([1, 2]).unwrap();
    assert!(table.get_row(LAST_ROW).is_ok());
    assert!(matches!(
        table.get_row(-2),
        Err(TableError::InvalidIndex { index: -2, len: 1 })
    ));
    assert!(matches!(
        table.get_cell(1, "a"),
        Err(TableError::InvalidIndex { .. })
    ));
    assert!(matches!(
        table.header_at(2),
        Err(TableError::InvalidIndex { .. })
    ));
}

#[test]
fn arity_mismatch_reports_both_lengths() {
    let dir = TempDir::new().unwrap();
    let writer = IncrementalWriter::new(dir.path().join("test.csv"), ["a", "b", "c"]).unwrap();

    let error = writer.write_row([1, 2]).unwrap_err();
    assert!(matches!(
        error,
        TableError::ArityMismatch {
            expected: 3,
            actual: 2
        }
    ));
    assert_eq!(error.to_string(), "Expected 3 items, but got 2");
}

#[test]
fn empty_delimiter_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    write_lines(&path, Some(&["a", "b"]), &["1,2"], ",");

    let result = Table::from_file(&path, None, "", true);
    assert!(matches!(result, Err(TableError::EmptyDelimiter)));

    let result = IncrementalWriterBuilder::new()
        .delimiter("")
        .from_path(&path, ["a", "b"]);
    assert!(matches!(result, Err(TableError::EmptyDelimiter)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n1,2\n");
}
