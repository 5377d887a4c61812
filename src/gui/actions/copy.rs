// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, file};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.scored.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = file::scores_to_string(&app.state.options.export, &app.scored);
    logf!(
        "Copy: group={}, rows={}, metrics={}",
        app.state.options.eval.group,
        app.scored.len(),
        app.state.options.export.include_metrics
    );

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} row(s) to clipboard", app.scored.len()));
}
