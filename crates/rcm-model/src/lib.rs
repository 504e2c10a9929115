pub mod error;
pub mod options;
pub mod summary;

pub use error::{MergeError, Result};
pub use options::{DEFAULT_CSV_SEPARATOR, MergeOptions};
pub use summary::MergeSummary;
