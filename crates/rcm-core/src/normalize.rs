//! Height unit normalization.

use polars::prelude::{DataFrame, NamedFrom, Series};

use rcm_ingest::{cell_string, format_numeric, is_missing, parse_f64};
use rcm_model::Result;

/// Column the height heuristic applies to.
pub const HEIGHT_COLUMN: &str = "pat_height";

/// Rescale centimeter heights to meters: any value strictly greater than 3
/// is divided by 100. Values at or below 3 are taken to already be meters.
/// Missing and non-numeric values pass through unchanged. No-op when the
/// column is absent.
pub fn normalize_height(df: &mut DataFrame) -> Result<()> {
    if df.column(HEIGHT_COLUMN).is_err() {
        return Ok(());
    }
    let values: Vec<Option<String>> = (0..df.height())
        .map(|idx| {
            let value = cell_string(df, HEIGHT_COLUMN, idx);
            if is_missing(&value) {
                return None;
            }
            match parse_f64(&value) {
                Some(number) if number > 3.0 => Some(format_numeric(number / 100.0)),
                _ => Some(value),
            }
        })
        .collect();
    df.with_column(Series::new(HEIGHT_COLUMN.into(), values))?;
    Ok(())
}
