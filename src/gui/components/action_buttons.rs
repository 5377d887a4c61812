// src/gui/components/action_buttons.rs

use std::path::{Path, PathBuf};

use eframe::egui::{self, Checkbox};
use crate::{
    gui::app::App,
    config::options::{
        ExportFormat,
        ExportType::{PerTeam, SingleFile},
    },
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut view_changed = false;
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers + metric columns ---
        ui.horizontal(|ui| {
            let prev_fmt = export.format;
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            if export.format != prev_fmt {
                logf!("UI: Export format → {:?}", export.format);
                if !app.out_path_dirty {
                    app.out_path_text = export.out_path().to_string_lossy().into_owned();
                }
            }

            ui.separator();
            if ui.checkbox(&mut export.include_headers, "Include headers").changed() {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
            if ui.checkbox(&mut export.include_metrics, "Metric columns").changed() {
                logf!("UI: Include_metrics → {}", export.include_metrics);
                view_changed = true;
            }
            ui.checkbox(&mut app.state.gui.show_chart, "Chart");
        });
    }
    if view_changed {
        app.rebuild_view();
    }

    let export = &mut app.state.options.export;

    // --- Per-team toggle + Output field ---
    let mut open_folder_clicked = false;
    ui.horizontal(|ui| {
        let mut single = matches!(export.export_type, SingleFile);
        if ui.add(Checkbox::new(&mut single, "All teams in one file")).changed() {
            export.export_type = if single { SingleFile } else { PerTeam };
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
            logf!("UI: export_type → {:?}", export.export_type);
        }

        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("📁").on_hover_text("Open output folder").clicked() {
            open_folder_clicked = true;
        }
    });

    if open_folder_clicked {
        open_output_folder(app);
    }

    // Actions: Copy / Export
    use crate::gui::actions;
    ui.horizontal(|ui| {
        let has_rows = !app.scored.is_empty();

        if ui.add_enabled(has_rows, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }

        if ui.add_enabled(has_rows, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }

        ui.label(app.status_text());
    });
}

/// Reveal the export location in the platform file manager.
fn open_output_folder(app: &App) {
    let export = &app.state.options.export;
    let path = export.out_path();

    // SingleFile points at a file, PerTeam at a directory.
    let target = match export.export_type {
        SingleFile => path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(".")),
        PerTeam => path,
    };

    let existing = target
        .ancestors()
        .find(|p| p.is_dir())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let folder = match std::fs::canonicalize(&existing) {
        Ok(p) => p,
        Err(e) => {
            loge!("Cannot resolve folder path {}: {}", existing.display(), e);
            app.status(format!("Cannot resolve folder path: {e}"));
            return;
        }
    };

    match spawn_file_manager(&folder) {
        Ok(()) => logf!("Opened folder: {}", folder.display()),
        Err(e) => {
            loge!("Failed to open folder: {}", e);
            app.status(format!("Failed to open folder: {e}"));
        }
    }
}

fn spawn_file_manager(path: &Path) -> Result<(), String> {
    #[cfg(target_os = "windows")]
    let program = "explorer";
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(target_os = "linux")]
    let program = "xdg-open";
    #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
    return Err(s!("Opening folders not supported on this platform"));

    #[cfg(any(target_os = "windows", target_os = "macos", target_os = "linux"))]
    std::process::Command::new(program)
        .arg(path)
        .spawn()
        .map(|_| ())
        .map_err(|e| format!("Failed to spawn {program}: {e}"))
}
