//! Extension-dispatched table reading and writing.

use std::ffi::OsStr;
use std::path::Path;

use polars::prelude::DataFrame;
use tracing::debug;

use rcm_model::{MergeError, Result};

use crate::delimited::{read_delimited, write_delimited};
use crate::spreadsheet::{read_xlsx, write_xlsx};

/// Supported table formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Xlsx,
    Tsv,
    Csv,
}

impl TableFormat {
    /// Determine the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .unwrap_or("")
            .to_ascii_lowercase();
        match extension.as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "tsv" => Ok(Self::Tsv),
            "csv" => Ok(Self::Csv),
            _ => Err(MergeError::UnsupportedFormat { extension }),
        }
    }
}

/// Read a table, dispatching on the file extension. The separator applies to
/// `.csv` files only; `.tsv` always reads with tabs.
pub fn read_table(path: &Path, separator: u8) -> Result<DataFrame> {
    let format = TableFormat::from_path(path)?;
    debug!(file = %path.display(), format = ?format, "reading table");
    match format {
        TableFormat::Xlsx => read_xlsx(path),
        TableFormat::Tsv => read_delimited(path, b'\t'),
        TableFormat::Csv => read_delimited(path, separator),
    }
}

/// Write a table, dispatching on the file extension. The `.tsv` writer always
/// emits tabs and the `.csv` writer always emits commas, regardless of the
/// separator any earlier read used.
pub fn write_table(df: &DataFrame, path: &Path) -> Result<()> {
    let format = TableFormat::from_path(path)?;
    debug!(file = %path.display(), rows = df.height(), format = ?format, "writing table");
    match format {
        TableFormat::Xlsx => write_xlsx(df, path),
        TableFormat::Tsv => write_delimited(df, path, b'\t'),
        TableFormat::Csv => write_delimited(df, path, b','),
    }
}
