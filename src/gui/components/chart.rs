// src/gui/components/chart.rs
//
// Horizontal bar chart of the top-N final scores. Clicking a bar
// highlights that player in the table.

use eframe::egui::{self, Align2, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::config::consts::CHART_TOP_N;
use crate::engine::normalize::SCALE_MAX;
use crate::gui::app::App;

const BAR_H: f32 = 16.0;
const GAP: f32 = 4.0;
const LABEL_W: f32 = 180.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let n = app.scored.len().min(CHART_TOP_N);
    if n == 0 {
        return;
    }

    ui.label(egui::RichText::new(format!("Top {n}")).strong());

    let width = ui.available_width();
    let height = n as f32 * (BAR_H + GAP);
    let (rect, resp) = ui.allocate_exact_size(Vec2::new(width, height), Sense::click());
    let painter = ui.painter_at(rect);

    let visuals = ui.visuals();
    let text_color = visuals.text_color();
    let bar_fill = visuals.selection.bg_fill.linear_multiply(0.6);
    let hl_fill = visuals.selection.bg_fill;
    let hl_stroke = Stroke::new(1.5, visuals.selection.stroke.color);

    // Scores live on 0..=SCALE_MAX; bars share that axis.
    let bar_w = (width - LABEL_W - 48.0).max(20.0);
    let font = FontId::proportional(12.0);

    let mut bars: Vec<(Rect, usize)> = Vec::with_capacity(n);
    for (i, p) in app.scored.iter().take(n).enumerate() {
        let top = rect.top() + i as f32 * (BAR_H + GAP);
        let label_pos = Pos2::new(rect.left() + LABEL_W - 6.0, top + BAR_H / 2.0);
        painter.text(label_pos, Align2::RIGHT_CENTER, &p.name, font.clone(), text_color);

        let frac = (p.final_score / SCALE_MAX).clamp(0.0, 1.0) as f32;
        let bar = Rect::from_min_size(
            Pos2::new(rect.left() + LABEL_W, top),
            Vec2::new((bar_w * frac).max(1.0), BAR_H),
        );
        let highlighted = app.state.gui.highlighted_row == Some(p.row);
        painter.rect_filled(bar, 2.0, if highlighted { hl_fill } else { bar_fill });
        if highlighted {
            painter.rect_stroke(bar, 2.0, hl_stroke, StrokeKind::Outside);
        }
        painter.text(
            Pos2::new(bar.right() + 6.0, top + BAR_H / 2.0),
            Align2::LEFT_CENTER,
            format!("{:.2}", p.final_score),
            font.clone(),
            text_color,
        );

        let row_rect = Rect::from_min_max(Pos2::new(rect.left(), top), Pos2::new(rect.right(), top + BAR_H));
        bars.push((row_rect, p.row));
    }

    if resp.clicked() {
        if let Some(pos) = resp.interact_pointer_pos() {
            if let Some(&(_, row)) = bars.iter().find(|(r, _)| r.contains(pos)) {
                let hl = &mut app.state.gui.highlighted_row;
                *hl = if *hl == Some(row) { None } else { Some(row) };
            }
        }
    }
    if resp.hovered() && bars.iter().any(|(r, _)| resp.hover_pos().is_some_and(|p| r.contains(p))) {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
}
