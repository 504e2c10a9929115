//! Spreadsheet (xlsx) reader and writer.
//!
//! The first worksheet is read; its first row is the header row. The writer
//! emits numeric cells for values that parse as numbers so a written file
//! round-trips the way a hand-entered sheet would.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use polars::prelude::DataFrame;
use rust_xlsxwriter::Workbook;

use rcm_model::{MergeError, Result};

use crate::frame::{column_names, frame_from_rows, row_strings};
use crate::polars_utils::{format_numeric, parse_f64};

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(v) => v.to_string(),
        Data::Float(v) => format_numeric(*v),
        Data::Bool(b) => if *b { "1" } else { "0" }.to_string(),
        Data::DateTime(dt) => format_numeric(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
    }
}

/// Read the first worksheet of an xlsx workbook into a string-typed frame.
pub fn read_xlsx(path: &Path) -> Result<DataFrame> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|error| MergeError::Spreadsheet(format!("{}: {error}", path.display())))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| {
            MergeError::Spreadsheet(format!("{}: workbook has no worksheets", path.display()))
        })?
        .map_err(|error| MergeError::Spreadsheet(format!("{}: {error}", path.display())))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = match rows_iter.next() {
        Some(row) => row.iter().map(cell_to_string).collect(),
        None => Vec::new(),
    };
    let rows: Vec<Vec<String>> = rows_iter
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();
    frame_from_rows(&headers, &rows)
}

/// Write a frame as an xlsx workbook with a single worksheet. Numeric-looking
/// values are written as numbers, everything else as strings, nulls as empty
/// cells.
pub fn write_xlsx(df: &DataFrame, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, name) in column_names(df).iter().enumerate() {
        worksheet
            .write_string(0, col as u16, name)
            .map_err(|error| MergeError::Spreadsheet(error.to_string()))?;
    }
    for row in 0..df.height() {
        for (col, value) in row_strings(df, row).iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let cell_row = (row + 1) as u32;
            if let Some(number) = parse_f64(value) {
                worksheet
                    .write_number(cell_row, col as u16, number)
                    .map_err(|error| MergeError::Spreadsheet(error.to_string()))?;
            } else {
                worksheet
                    .write_string(cell_row, col as u16, value)
                    .map_err(|error| MergeError::Spreadsheet(error.to_string()))?;
            }
        }
    }
    workbook
        .save(path)
        .map_err(|error| MergeError::Spreadsheet(error.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_and_reads_back_strings_and_numbers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.xlsx");
        let df = frame_from_rows(
            &["pat_id".to_string(), "note".to_string()],
            &[
                vec!["1".to_string(), "hello".to_string()],
                vec!["2".to_string(), String::new()],
            ],
        )
        .unwrap();
        write_xlsx(&df, &path).unwrap();
        let round = read_xlsx(&path).unwrap();
        assert_eq!(column_names(&round), vec!["pat_id", "note"]);
        assert_eq!(round.height(), 2);
        assert_eq!(row_strings(&round, 0), vec!["1", "hello"]);
        assert_eq!(round.column("note").unwrap().null_count(), 1);
    }
}
