//! Delimited (csv/tsv) readers and writers.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use polars::prelude::DataFrame;

use rcm_model::Result;

use crate::frame::{column_names, frame_from_rows, row_strings};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a delimited file into a string-typed frame. The first record is the
/// header row.
pub fn read_delimited(path: &Path, separator: u8) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(separator)
        .flexible(true)
        .from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(normalize_cell).collect());
    }
    frame_from_rows(&headers, &rows)
}

/// Write a frame as a delimited file. Nulls are rendered as empty cells.
pub fn write_delimited(df: &DataFrame, path: &Path, separator: u8) -> Result<()> {
    let mut writer = WriterBuilder::new().delimiter(separator).from_path(path)?;
    writer.write_record(column_names(df))?;
    for idx in 0..df.height() {
        writer.write_record(row_strings(df, idx))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_custom_separator_and_nulls() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patients.csv");
        std::fs::write(&path, "pat_id;note\n1;hello\n2;\n").unwrap();
        let df = read_delimited(&path, b';').unwrap();
        assert_eq!(column_names(&df), vec!["pat_id", "note"]);
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("note").unwrap().null_count(), 1);
    }

    #[test]
    fn strips_bom_from_headers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patients.csv");
        std::fs::write(&path, "\u{feff}pat_id,note\n1,x\n").unwrap();
        let df = read_delimited(&path, b',').unwrap();
        assert_eq!(column_names(&df), vec!["pat_id", "note"]);
    }

    #[test]
    fn writes_tabs_and_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        let df = frame_from_rows(
            &["a".to_string(), "b".to_string()],
            &[vec!["1".to_string(), "x y".to_string()]],
        )
        .unwrap();
        write_delimited(&df, &path, b'\t').unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("a\tb\n"));
        let round = read_delimited(&path, b'\t').unwrap();
        assert_eq!(round.height(), 1);
        assert_eq!(row_strings(&round, 0), vec!["1", "x y"]);
    }
}
