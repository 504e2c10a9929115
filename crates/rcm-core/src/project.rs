//! Column whitelist projection.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;

use rcm_ingest::column_names;
use rcm_model::Result;

/// Drop every column whose name is not in the whitelist. Whitelist entries
/// matching no column are ignored; an empty whitelist keeps everything.
/// Surviving columns keep their relative order.
pub fn project_columns(df: &DataFrame, whitelist: &BTreeSet<String>) -> Result<DataFrame> {
    if whitelist.is_empty() {
        return Ok(df.clone());
    }
    let keep: Vec<String> = column_names(df)
        .into_iter()
        .filter(|name| whitelist.contains(name))
        .collect();
    Ok(df.select(keep)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rcm_ingest::frame_from_rows;

    fn sample_frame() -> DataFrame {
        frame_from_rows(
            &[
                "pat_id".to_string(),
                "pat_height".to_string(),
                "notes".to_string(),
            ],
            &[vec![
                "1".to_string(),
                "170".to_string(),
                "hello".to_string(),
            ]],
        )
        .unwrap()
    }

    #[test]
    fn keeps_only_whitelisted_columns() {
        let whitelist = BTreeSet::from(["pat_id".to_string()]);
        let projected = project_columns(&sample_frame(), &whitelist).unwrap();
        assert_eq!(column_names(&projected), vec!["pat_id"]);
    }

    #[test]
    fn empty_whitelist_keeps_everything() {
        let projected = project_columns(&sample_frame(), &BTreeSet::new()).unwrap();
        assert_eq!(projected.width(), 3);
    }

    #[test]
    fn unknown_entries_are_ignored() {
        let whitelist = BTreeSet::from(["pat_id".to_string(), "no_such_column".to_string()]);
        let projected = project_columns(&sample_frame(), &whitelist).unwrap();
        assert_eq!(column_names(&projected), vec!["pat_id"]);
    }

    proptest! {
        #[test]
        fn projection_is_idempotent(selection in proptest::collection::btree_set(
            prop_oneof![
                Just("pat_id".to_string()),
                Just("pat_height".to_string()),
                Just("notes".to_string()),
                Just("absent".to_string()),
            ],
            0..4,
        )) {
            let once = project_columns(&sample_frame(), &selection).unwrap();
            let twice = project_columns(&once, &selection).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
