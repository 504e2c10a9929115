use std::path::PathBuf;

/// Counters describing one conversion run, for the CLI summary table.
#[derive(Debug, Clone, Default)]
pub struct MergeSummary {
    /// Distinct patient ids seen in the input.
    pub patients_total: usize,
    /// Patients skipped because they had no recruiting row.
    pub patients_skipped: usize,
    /// Patients with more than one recruiting row (first one used).
    pub patients_multi_recruiting: usize,
    /// Questionnaire rows emitted by reconciliation, before append/dedupe.
    pub questionnaire_rows: usize,
    /// Rows in the table that was written to the destination.
    pub rows_written: usize,
    /// Exact duplicate rows removed on the append path.
    pub duplicates_removed: usize,
    /// True when the run appended to an existing output file.
    pub appended: bool,
    /// False when the write was skipped (unsupported output format).
    pub written: bool,
    /// Destination path.
    pub output_file: PathBuf,
    /// Backup written before appending, if any.
    pub backup_file: Option<PathBuf>,
}
