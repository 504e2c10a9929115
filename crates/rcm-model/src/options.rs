//! Configuration options for a merge run.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Default field separator used when reading `.csv` files and when re-reading
/// an existing output on the append path.
pub const DEFAULT_CSV_SEPARATOR: u8 = b',';

/// Options controlling a single conversion run.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Patient export file containing recruiting and questionnaire rows.
    pub patient_file: PathBuf,

    /// Destination for the merged table.
    pub output_file: PathBuf,

    /// Columns to retain in the output. Empty set keeps all columns.
    pub column_whitelist: BTreeSet<String>,

    /// Field separator for `.csv` input files. `.tsv` files always use tabs.
    pub csv_separator: u8,
}

impl MergeOptions {
    pub fn new(patient_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            patient_file: patient_file.into(),
            output_file: output_file.into(),
            column_whitelist: BTreeSet::new(),
            csv_separator: DEFAULT_CSV_SEPARATOR,
        }
    }

    /// Set the column whitelist.
    #[must_use]
    pub fn with_whitelist(mut self, whitelist: BTreeSet<String>) -> Self {
        self.column_whitelist = whitelist;
        self
    }

    /// Set the CSV field separator.
    #[must_use]
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.csv_separator = separator;
        self
    }
}
