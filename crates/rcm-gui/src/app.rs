//! Main application struct and eframe::App implementation.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::{error, info, warn};

use rcm_core::{RunLogWriter, convert};
use rcm_model::MergeOptions;

use crate::log_panel::LogPanelBuffer;

/// Desktop form state: the two paths, the free-text whitelist, and the
/// shared logging handles.
pub struct MergeApp {
    patient_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    whitelist_text: String,
    run_log: RunLogWriter,
    log_panel: LogPanelBuffer,
}

impl MergeApp {
    pub fn new(run_log: RunLogWriter, log_panel: LogPanelBuffer) -> Self {
        Self {
            patient_file: None,
            output_file: None,
            whitelist_text: String::new(),
            run_log,
            log_panel,
        }
    }

    fn select_patient_file(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Tables", &["xlsx", "tsv", "csv"])
            .pick_file();
        if let Some(path) = picked {
            // Picking an input pre-fills the output next to it.
            self.output_file = Some(path.with_extension("merged.xlsx"));
            self.patient_file = Some(path);
        }
    }

    fn select_output_file(&mut self) {
        let mut dialog = rfd::FileDialog::new().add_filter("Excel file", &["xlsx"]);
        if let Some(current) = &self.output_file {
            if let Some(dir) = current.parent() {
                dialog = dialog.set_directory(dir);
            }
            if let Some(name) = current.file_name().and_then(|name| name.to_str()) {
                dialog = dialog.set_file_name(name);
            }
        }
        if let Some(path) = dialog.save_file() {
            self.output_file = Some(path);
        }
    }

    /// Parse the comma-separated whitelist field into a set.
    fn whitelist(&self) -> BTreeSet<String> {
        self.whitelist_text
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(String::from)
            .collect()
    }

    fn run_conversion(&self) {
        let (Some(patient_file), Some(output_file)) = (&self.patient_file, &self.output_file)
        else {
            warn!("select a patients file and an output file first");
            return;
        };
        let options = MergeOptions::new(patient_file, output_file).with_whitelist(self.whitelist());
        // Runs synchronously on the UI thread; the window blocks until the
        // conversion returns.
        match convert(&options, &self.run_log) {
            Ok(summary) => info!(rows = summary.rows_written, "merge finished"),
            Err(error) => error!("{error}"),
        }
    }
}

impl eframe::App for MergeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("merge_form").num_columns(2).show(ui, |ui| {
                path_field(ui, self.patient_file.as_ref());
                if ui.button("patients file").clicked() {
                    self.select_patient_file();
                }
                ui.end_row();

                ui.add(
                    egui::TextEdit::singleline(&mut self.whitelist_text)
                        .hint_text("column whitelist, comma separated")
                        .desired_width(520.0),
                );
                ui.label("");
                ui.end_row();

                path_field(ui, self.output_file.as_ref());
                if ui.button("output file").clicked() {
                    self.select_output_file();
                }
                ui.end_row();
            });

            ui.horizontal(|ui| {
                if ui.button("Start").clicked() {
                    self.run_conversion();
                }
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.separator();
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(self.log_panel.contents()).monospace());
                });
        });
    }
}

fn path_field(ui: &mut egui::Ui, path: Option<&PathBuf>) {
    let mut text = path.map(|path| path.display().to_string()).unwrap_or_default();
    ui.add_enabled(
        false,
        egui::TextEdit::singleline(&mut text).desired_width(520.0),
    );
}
