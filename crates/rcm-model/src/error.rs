use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("patient file {0} does not exist")]
    FileNotFound(PathBuf),
    #[error("output directory {0} does not exist")]
    InvalidOutputDirectory(PathBuf),
    #[error("unsupported file format `.{extension}` (supported: .xlsx, .tsv, .csv)")]
    UnsupportedFormat { extension: String },
    #[error(
        "output file {existing} already exists with different columns than the table \
         merged from {input}, cannot append"
    )]
    SchemaMismatch { existing: PathBuf, input: PathBuf },
    #[error("required column `{0}` is missing from the patient file")]
    MissingColumn(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Table(#[from] polars::error::PolarsError),
    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),
}

pub type Result<T> = std::result::Result<T, MergeError>;
