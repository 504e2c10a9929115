//! The conversion routine: one linear pass from patient export to merged
//! output.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use rcm_ingest::read_table;
use rcm_model::{MergeError, MergeOptions, MergeSummary, Result};

use crate::append::write_with_append;
use crate::normalize::normalize_height;
use crate::project::project_columns;
use crate::reconcile::reconcile_patients;
use crate::run_log::RunLogWriter;

/// Merge recruiting and questionnaire rows from the patient file into the
/// output file.
///
/// Existence of the input file and of the output's parent directory are
/// checked before any processing; the run log is attached for the duration
/// of the call only and released on every exit path.
pub fn convert(options: &MergeOptions, run_log: &RunLogWriter) -> Result<MergeSummary> {
    if !options.patient_file.is_file() {
        return Err(MergeError::FileNotFound(options.patient_file.clone()));
    }
    let output_dir = output_parent(&options.output_file);
    if !output_dir.is_dir() {
        return Err(MergeError::InvalidOutputDirectory(output_dir));
    }

    let log_file = options.output_file.with_extension("log");
    info!(file = %log_file.display(), "logging to file");
    let _log_guard = run_log.attach(&log_file)?;

    let table = match read_table(&options.patient_file, options.csv_separator) {
        Ok(table) => table,
        Err(MergeError::UnsupportedFormat { extension }) => {
            error!(
                file = %options.patient_file.display(),
                "unsupported patient file format `.{extension}`, nothing written"
            );
            return Ok(MergeSummary {
                output_file: options.output_file.clone(),
                ..MergeSummary::default()
            });
        }
        Err(error) => return Err(error),
    };

    let (merged, report) = reconcile_patients(&table)?;
    let mut merged = project_columns(&merged, &options.column_whitelist)?;
    normalize_height(&mut merged)?;
    let questionnaire_rows = merged.height();

    let outcome = write_with_append(&merged, &options.output_file, &options.patient_file)?;
    if outcome.written {
        info!("conversion completed successfully");
    }
    Ok(MergeSummary {
        patients_total: report.patients_total,
        patients_skipped: report.patients_skipped,
        patients_multi_recruiting: report.patients_multi_recruiting,
        questionnaire_rows,
        rows_written: outcome.rows_written,
        duplicates_removed: outcome.duplicates_removed,
        appended: outcome.appended,
        written: outcome.written,
        output_file: options.output_file.clone(),
        backup_file: outcome.backup_file,
    })
}

/// Parent directory of the output path; a bare file name counts as the
/// current directory.
fn output_parent(output_file: &Path) -> PathBuf {
    match output_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
