//! Integration tests for extension-dispatched table I/O.

use rcm_ingest::{cell_string, column_names, frame_from_rows, read_table, write_table};
use rcm_model::MergeError;

#[test]
fn tsv_always_reads_with_tabs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.tsv");
    std::fs::write(&path, "pat_id\tnote\n1\thello world\n").unwrap();
    // The separator argument only applies to .csv files.
    let table = read_table(&path, b';').unwrap();
    assert_eq!(column_names(&table), vec!["pat_id", "note"]);
    assert_eq!(cell_string(&table, "note", 0), "hello world");
}

#[test]
fn csv_honors_caller_separator_on_read_but_writes_commas() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export.csv");
    let output = dir.path().join("merged.csv");
    std::fs::write(&input, "pat_id;note\n1;hello\n").unwrap();

    let table = read_table(&input, b';').unwrap();
    assert_eq!(cell_string(&table, "note", 0), "hello");

    write_table(&table, &output).unwrap();
    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("pat_id,note\n"));
}

#[test]
fn unknown_extension_is_rejected_for_read_and_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.parquet");
    std::fs::write(&path, "").unwrap();
    assert!(matches!(
        read_table(&path, b','),
        Err(MergeError::UnsupportedFormat { .. })
    ));

    let df = frame_from_rows(&["a".to_string()], &[]).unwrap();
    assert!(matches!(
        write_table(&df, &path),
        Err(MergeError::UnsupportedFormat { .. })
    ));
}

#[test]
fn xlsx_dispatch_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("export.xlsx");
    let df = frame_from_rows(
        &["pat_id".to_string(), "pat_height".to_string()],
        &[vec!["1".to_string(), "170".to_string()]],
    )
    .unwrap();
    write_table(&df, &path).unwrap();
    let table = read_table(&path, b',').unwrap();
    assert_eq!(cell_string(&table, "pat_height", 0), "170");
}
