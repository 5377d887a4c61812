// src/gui/components/source_panel.rs
//
// Left panel: input files on top, position groups below.

use std::path::PathBuf;

use eframe::egui;
use crate::gui::{actions, app::App};

fn tune_scroll(ui: &mut egui::Ui) {
    let s = &mut ui.style_mut().spacing.scroll;
    s.floating = false;
    s.bar_width = 10.0;
    s.bar_inner_margin = 0.0;
    s.handle_min_length = 48.0;
    s.foreground_color = true;
    let visuals = &mut ui.style_mut().visuals;
    visuals.extreme_bg_color = visuals.panel_fill;
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    tune_scroll(ui);

    ui.heading("Sources");

    let mut submit = false;
    ui.horizontal(|ui| {
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.source_path_text)
                .hint_text("path/to/stats.csv")
                .desired_width(ui.available_width() - 48.0),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }
        if ui.button("Load").clicked() {
            submit = true;
        }
    });
    if submit {
        let text = app.state.gui.source_path_text.trim().to_string();
        if text.is_empty() {
            app.status("Enter a file path first");
        } else {
            actions::add_sources(app, vec![PathBuf::from(text)]);
        }
    }

    ui.label(egui::RichText::new("…or drop CSV/TSV files on the window").weak());

    let mut clear = false;
    ui.horizontal(|ui| {
        ui.label(format!(
            "{} file(s), {} row(s)",
            app.sources.paths.len(),
            app.sources.table.row_count()
        ));
        if ui.add_enabled(!app.sources.is_empty(), egui::Button::new("Clear")).clicked() {
            clear = true;
        }
    });
    if clear {
        actions::clear_sources(app);
    }

    egui::ScrollArea::vertical()
        .id_salt("sources_scroll")
        .max_height(160.0)
        .show(ui, |ui| {
            for p in &app.sources.paths {
                let name = p.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
                ui.label(name).on_hover_text(p.display().to_string());
            }
        });

    ui.separator();
    ui.heading("Groups");

    let taxonomy = app.state.options.eval.taxonomy.taxonomy();
    egui::ScrollArea::vertical()
        .id_salt("groups_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);
            for g in taxonomy.groups {
                let selected = app.state.options.eval.group == g.name;
                let resp = ui
                    .selectable_label(selected, g.name)
                    .on_hover_text(g.codes.join(", "));
                if resp.clicked() && !selected {
                    app.state.options.eval.group = s!(g.name);
                    app.dirty = true;
                    logf!("UI: Group → {}", g.name);
                }
            }
        });
}
