pub mod append;
pub mod convert;
pub mod normalize;
pub mod project;
pub mod reconcile;
pub mod run_log;

pub use append::{AppendOutcome, drop_duplicate_rows, write_with_append};
pub use convert::convert;
pub use normalize::{HEIGHT_COLUMN, normalize_height};
pub use project::project_columns;
pub use reconcile::{
    EVENT_NAME_COLUMN, PATIENT_ID_COLUMN, QUESTIONNAIRE_PREFIX, RECRUITING_PREFIX, ReconcileReport,
    reconcile_patients,
};
pub use run_log::{RunLogGuard, RunLogWriter};
