//! String-typed DataFrame construction and row extraction.

use polars::prelude::{AnyValue, DataFrame, IntoColumn, NamedFrom, Series};

use rcm_model::Result;

use crate::polars_utils::{any_to_string, cell_string};

/// Build a DataFrame of string columns from headers and row-major cells.
/// Cells that trim to empty become nulls; missing trailing cells in short
/// rows are treated the same way.
pub fn frame_from_rows(headers: &[String], rows: &[Vec<String>]) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(headers.len());
    for (col_idx, header) in headers.iter().enumerate() {
        let values: Vec<Option<String>> = rows
            .iter()
            .map(|row| {
                let value = row.get(col_idx).map(String::as_str).unwrap_or("").trim();
                if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            })
            .collect();
        columns.push(Series::new(header.as_str().into(), values).into_column());
    }
    Ok(DataFrame::new(columns)?)
}

/// Column names in frame order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// One row as strings in column order; nulls become empty strings.
pub fn row_strings(df: &DataFrame, idx: usize) -> Vec<String> {
    df.get_columns()
        .iter()
        .map(|column| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
        .collect()
}

/// Values of one column as strings; nulls become empty strings. Empty when
/// the column is absent.
pub fn column_strings(df: &DataFrame, name: &str) -> Vec<String> {
    if df.column(name).is_err() {
        return Vec::new();
    }
    (0..df.height())
        .map(|idx| cell_string(df, name, idx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cells_become_nulls() {
        let headers = vec!["a".to_string(), "b".to_string()];
        let rows = vec![
            vec!["1".to_string(), "  ".to_string()],
            vec!["2".to_string()],
        ];
        let df = frame_from_rows(&headers, &rows).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("b").unwrap().null_count(), 2);
        assert_eq!(row_strings(&df, 0), vec!["1".to_string(), String::new()]);
    }

    #[test]
    fn column_order_is_preserved() {
        let headers = vec!["b".to_string(), "a".to_string()];
        let df = frame_from_rows(&headers, &[]).unwrap();
        assert_eq!(column_names(&df), vec!["b".to_string(), "a".to_string()]);
        assert_eq!(df.height(), 0);
    }
}
