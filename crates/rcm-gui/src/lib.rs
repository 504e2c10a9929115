//! Desktop form for the REDCap merge tool.
//!
//! The form is a thin shell over the same conversion routine the CLI calls:
//! two file pickers, a whitelist field, and a log panel fed by the shared
//! tracing subscriber.

mod app;
mod log_panel;

pub use app::MergeApp;
pub use log_panel::LogPanelBuffer;

use rcm_core::RunLogWriter;

/// Open the desktop form. Blocks on the event loop until the window closes.
pub fn run(run_log: RunLogWriter, log_panel: LogPanelBuffer) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("REDCap Merge")
            .with_inner_size([760.0, 520.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "REDCap Merge",
        options,
        Box::new(move |_cc| Ok(Box::new(MergeApp::new(run_log, log_panel)))),
    )
}
