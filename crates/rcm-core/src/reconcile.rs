//! Per-patient reconciliation of recruiting and questionnaire rows.
//!
//! Each patient's questionnaire rows form the output; columns that are
//! entirely missing across a patient's questionnaire rows are filled from
//! that patient's recruiting row. Rows tagged neither recruiting nor
//! questionnaire are dropped.

use std::collections::BTreeSet;

use polars::prelude::{BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, Series};
use tracing::{debug, warn};

use rcm_ingest::{cell_string, column_names, column_strings, is_missing};
use rcm_model::{MergeError, Result};

/// Event-name prefix marking a recruiting row.
pub const RECRUITING_PREFIX: &str = "rekrutierung_";
/// Event-name prefix marking a questionnaire row.
pub const QUESTIONNAIRE_PREFIX: &str = "befragung_";
/// Column holding the patient identifier.
pub const PATIENT_ID_COLUMN: &str = "pat_id";
/// Column holding the REDCap event name used for row tagging.
pub const EVENT_NAME_COLUMN: &str = "redcap_event_name";

/// Counters produced by one reconciliation pass.
#[derive(Debug, Clone, Default)]
pub struct ReconcileReport {
    pub patients_total: usize,
    pub patients_skipped: usize,
    pub patients_multi_recruiting: usize,
}

/// Reconcile the full input table patient by patient, in the order patient
/// ids first appear. A patient without a recruiting row contributes nothing;
/// otherwise it contributes exactly its questionnaire rows, possibly filled.
pub fn reconcile_patients(df: &DataFrame) -> Result<(DataFrame, ReconcileReport)> {
    for required in [PATIENT_ID_COLUMN, EVENT_NAME_COLUMN] {
        if df.column(required).is_err() {
            return Err(MergeError::MissingColumn(required.to_string()));
        }
    }
    let patient_ids = column_strings(df, PATIENT_ID_COLUMN);
    let events = column_strings(df, EVENT_NAME_COLUMN);

    let mut order: Vec<String> = Vec::new();
    let mut seen: BTreeSet<String> = BTreeSet::new();
    for id in &patient_ids {
        if seen.insert(id.clone()) {
            order.push(id.clone());
        }
    }

    let mut report = ReconcileReport {
        patients_total: order.len(),
        ..ReconcileReport::default()
    };
    let mut merged: Option<DataFrame> = None;

    for patient_id in &order {
        debug!(patient_id = %patient_id, "processing patient");

        let recruiting: Vec<usize> = (0..df.height())
            .filter(|&idx| {
                patient_ids[idx] == *patient_id && events[idx].starts_with(RECRUITING_PREFIX)
            })
            .collect();
        if recruiting.is_empty() {
            warn!(patient_id = %patient_id, "no recruiting data found, skipping patient");
            report.patients_skipped += 1;
            continue;
        }
        if recruiting.len() > 1 {
            warn!(
                patient_id = %patient_id,
                count = recruiting.len(),
                "multiple recruiting entries found, using the first one"
            );
            report.patients_multi_recruiting += 1;
        }
        let recruiting_row = recruiting[0];

        let keep: Vec<bool> = (0..df.height())
            .map(|idx| {
                patient_ids[idx] == *patient_id && events[idx].starts_with(QUESTIONNAIRE_PREFIX)
            })
            .collect();
        let mask = BooleanChunked::from_slice("questionnaire".into(), &keep);
        let mut questionnaire = df.filter(&mask)?;

        for name in column_names(df) {
            let all_missing = column_strings(&questionnaire, &name)
                .iter()
                .all(|value| is_missing(value));
            let recruiting_value = cell_string(df, &name, recruiting_row);
            if all_missing && !is_missing(&recruiting_value) {
                fill_column(&mut questionnaire, &name, &recruiting_value)?;
            }
        }

        merged = Some(match merged {
            Some(acc) => acc.vstack(&questionnaire)?,
            None => questionnaire,
        });
    }

    let merged = merged.unwrap_or_else(|| df.clear());
    Ok((merged, report))
}

/// Overwrite every value of `name` with `fill`. Only called when the column
/// is entirely missing for the patient at hand.
fn fill_column(df: &mut DataFrame, name: &str, fill: &str) -> Result<()> {
    let values = vec![Some(fill.to_string()); df.height()];
    df.with_column(Series::new(name.into(), values))?;
    Ok(())
}
