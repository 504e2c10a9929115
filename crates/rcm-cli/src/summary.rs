//! Run summary table printed after a successful conversion.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use rcm_model::MergeSummary;

pub fn print_summary(summary: &MergeSummary) {
    println!("Output: {}", summary.output_file.display());
    if let Some(backup) = &summary.backup_file {
        println!("Backup: {}", backup.display());
    }
    if !summary.written {
        println!("No output written.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    add_count(&mut table, "Patients in export", summary.patients_total);
    add_count(
        &mut table,
        "Patients without recruiting data",
        summary.patients_skipped,
    );
    add_count(
        &mut table,
        "Patients with multiple recruiting rows",
        summary.patients_multi_recruiting,
    );
    add_count(
        &mut table,
        "Questionnaire rows merged",
        summary.questionnaire_rows,
    );
    add_count(&mut table, "Duplicates removed", summary.duplicates_removed);
    add_count(&mut table, "Rows written", summary.rows_written);
    table.add_row(vec![
        Cell::new("Mode"),
        Cell::new(if summary.appended { "appended" } else { "created" }),
    ]);
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn add_count(table: &mut Table, label: &str, count: usize) {
    table.add_row(vec![
        Cell::new(label),
        Cell::new(count).set_alignment(CellAlignment::Right),
    ]);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
