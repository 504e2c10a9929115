pub mod delimited;
pub mod format;
pub mod frame;
pub mod polars_utils;
pub mod spreadsheet;

pub use delimited::{read_delimited, write_delimited};
pub use format::{TableFormat, read_table, write_table};
pub use frame::{column_names, column_strings, frame_from_rows, row_strings};
pub use polars_utils::{any_to_string, cell_string, format_numeric, is_missing, parse_f64};
pub use spreadsheet::{read_xlsx, write_xlsx};
