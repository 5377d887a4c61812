// src/gui/components/data_table.rs
//
// Draws the live score table. Header click sorts; row click highlights.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode, Sense};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

fn preferred_width(col: usize) -> f32 {
    match col {
        0 => 44.0,        // Rank
        1 => 180.0,       // Player
        2 => 150.0,       // Team
        3 => 70.0,        // Position
        4 => 44.0,        // Age
        _ => 86.0,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.table.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new(app.status_text()).weak());
        });
        return;
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 7.0;
        s.bar_outer_margin = 0.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let cols = app.table.ncols();
    let avail_h = ui.available_height();
    let mut sort_clicked: Option<usize> = None;
    let mut row_clicked: Option<usize> = None;

    egui::ScrollArea::horizontal()
        .id_salt("score_table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .sense(Sense::click())
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);
            for ci in 0..cols {
                table = table.column(Column::initial(preferred_width(ci)).resizable(true).clip(true).at_least(20.0));
            }

            let t = &app.table;
            let highlighted = app.state.gui.highlighted_row;
            let sort = app.sort;

            table
                .header(24.0, |mut header| {
                    for (ci, h) in t.headers.iter().enumerate() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let arrow = match sort {
                                Some((c, true)) if c == ci => " ▼",
                                Some((c, false)) if c == ci => " ▲",
                                _ => "",
                            };
                            let label = egui::Label::new(RichText::new(join!(h.as_str(), arrow)).strong())
                                .selectable(false)
                                .sense(Sense::click());
                            if ui.add(label).clicked() {
                                sort_clicked = Some(ci);
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, t.nrows(), |mut row| {
                        let ix = row.index();
                        let id = t.row_ids[ix];
                        row.set_selected(highlighted == Some(id));

                        for (ci, cell) in t.rows[ix].iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let rt = RichText::new(cell);
                                if t.is_numeric(ci) {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(rt); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                                }
                            });
                        }

                        if row.response().clicked() {
                            row_clicked = Some(id);
                        }
                    });
                });
        });

    if let Some(ci) = sort_clicked {
        // Rank column resets to the engine order.
        app.sort = match app.sort {
            _ if ci == 0 => None,
            Some((c, desc)) if c == ci => Some((ci, !desc)),
            _ => Some((ci, app.table.is_numeric(ci))),
        };
        logd!("UI: Sort → {:?}", app.sort);
        app.rebuild_view();
    }
    if let Some(id) = row_clicked {
        let hl = &mut app.state.gui.highlighted_row;
        *hl = if *hl == Some(id) { None } else { Some(id) };
    }
}
