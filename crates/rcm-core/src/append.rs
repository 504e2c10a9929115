//! Output reconciliation: fresh write, or append with deduplication against
//! an existing output file.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use tracing::{error, info};

use rcm_ingest::{column_names, read_table, row_strings, write_table, write_xlsx};
use rcm_model::{DEFAULT_CSV_SEPARATOR, MergeError, Result};

/// What the write stage did.
#[derive(Debug, Clone, Default)]
pub struct AppendOutcome {
    pub rows_written: usize,
    pub duplicates_removed: usize,
    pub appended: bool,
    pub written: bool,
    pub backup_file: Option<PathBuf>,
}

/// Write the merged table to `output_file`. When the destination already
/// exists its column set must match; the existing table is then backed up,
/// stacked before the new rows, deduplicated, and rewritten.
pub fn write_with_append(
    df: &DataFrame,
    output_file: &Path,
    input_file: &Path,
) -> Result<AppendOutcome> {
    if !output_file.is_file() {
        info!(file = %output_file.display(), "writing merged data");
        return match write_table(df, output_file) {
            Ok(()) => Ok(AppendOutcome {
                rows_written: df.height(),
                written: true,
                ..AppendOutcome::default()
            }),
            Err(MergeError::UnsupportedFormat { extension }) => {
                error!(
                    file = %output_file.display(),
                    "unsupported output format `.{extension}`, skipping write"
                );
                Ok(AppendOutcome::default())
            }
            Err(error) => Err(error),
        };
    }

    // Existing outputs are re-read with the default comma separator, never
    // with the caller's CSV separator.
    let existing = match read_table(output_file, DEFAULT_CSV_SEPARATOR) {
        Ok(existing) => existing,
        Err(MergeError::UnsupportedFormat { extension }) => {
            error!(
                file = %output_file.display(),
                "unsupported output format `.{extension}`, skipping write"
            );
            return Ok(AppendOutcome::default());
        }
        Err(error) => return Err(error),
    };

    let column_order = column_names(&existing);
    let mut existing_columns = column_order.clone();
    let mut new_columns = column_names(df);
    existing_columns.sort();
    new_columns.sort();
    if existing_columns != new_columns {
        error!(
            existing = %output_file.display(),
            input = %input_file.display(),
            "output file already exists with different columns, cannot append"
        );
        return Err(MergeError::SchemaMismatch {
            existing: output_file.to_path_buf(),
            input: input_file.to_path_buf(),
        });
    }

    info!(
        file = %output_file.display(),
        "output file already exists with the same columns, appending and removing duplicates"
    );
    let backup_file = backup_path(output_file);
    info!(file = %backup_file.display(), "backing up existing file");
    // Backups are always spreadsheet-formatted, whatever the backup path's
    // own extension says.
    write_xlsx(&existing, &backup_file)?;

    let aligned = df.select(column_order)?;
    let combined = existing.vstack(&aligned)?;
    let (deduped, duplicates_removed) = drop_duplicate_rows(&combined)?;
    write_table(&deduped, output_file)?;
    Ok(AppendOutcome {
        rows_written: deduped.height(),
        duplicates_removed,
        appended: true,
        written: true,
        backup_file: Some(backup_file),
    })
}

/// `<stem>.backup.<suffix>`: the destination's extension text is kept even
/// though the backup content is xlsx.
fn backup_path(output_file: &Path) -> PathBuf {
    let suffix = output_file
        .extension()
        .and_then(OsStr::to_str)
        .unwrap_or("");
    output_file.with_extension(format!("backup.{suffix}"))
}

/// Remove exact full-row duplicates, keeping the first occurrence. Rows are
/// compared across all columns; partial matches are never merged.
pub fn drop_duplicate_rows(df: &DataFrame) -> Result<(DataFrame, usize)> {
    let mut seen: BTreeSet<Vec<String>> = BTreeSet::new();
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        keep.push(seen.insert(row_strings(df, idx)));
    }
    let removed = keep.iter().filter(|kept| !**kept).count();
    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    Ok((df.filter(&mask)?, removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcm_ingest::frame_from_rows;

    fn two_column_frame(rows: &[[&str; 2]]) -> DataFrame {
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect();
        frame_from_rows(&["a".to_string(), "b".to_string()], &rows).unwrap()
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let df = two_column_frame(&[["1", "x"], ["2", "y"], ["1", "x"]]);
        let (deduped, removed) = drop_duplicate_rows(&df).unwrap();
        assert_eq!(deduped.height(), 2);
        assert_eq!(removed, 1);
        assert_eq!(row_strings(&deduped, 0), vec!["1", "x"]);
        assert_eq!(row_strings(&deduped, 1), vec!["2", "y"]);
    }

    #[test]
    fn dedupe_requires_full_row_equality() {
        let df = two_column_frame(&[["1", "x"], ["1", "y"]]);
        let (deduped, removed) = drop_duplicate_rows(&df).unwrap();
        assert_eq!(deduped.height(), 2);
        assert_eq!(removed, 0);
    }

    #[test]
    fn backup_path_inserts_backup_before_extension() {
        assert_eq!(
            backup_path(Path::new("/tmp/out.xlsx")),
            PathBuf::from("/tmp/out.backup.xlsx")
        );
        assert_eq!(
            backup_path(Path::new("out.csv")),
            PathBuf::from("out.backup.csv")
        );
    }
}
