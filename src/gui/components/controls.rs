// src/gui/components/controls.rs
//
// Scoring parameters. Any change marks the app dirty; scoring reruns at
// the end of the frame.

use eframe::egui::{self, ComboBox, DragValue, Slider};

use crate::config::consts::{AGE_SLIDER_MAX, MINUTES_SLIDER_MAX};
use crate::engine::{NormalizationPolicy, TaxonomyVersion};
use crate::engine::types::WEIGHT_TOLERANCE;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut changed = false;
    let eval = &mut app.state.options.eval;

    ui.horizontal(|ui| {
        ui.label("Taxonomy:");
        let mut version = eval.taxonomy;
        ComboBox::from_id_salt("taxonomy")
            .selected_text(version.label())
            .show_ui(ui, |ui| {
                for v in [TaxonomyVersion::Current, TaxonomyVersion::Legacy] {
                    ui.selectable_value(&mut version, v, v.label());
                }
            });
        if version != eval.taxonomy {
            eval.set_taxonomy(version);
            logf!("UI: Taxonomy → {} (group={})", version.label(), eval.group);
            changed = true;
        }

        ui.separator();
        ui.label("Scaling:");
        let before = eval.policy;
        ComboBox::from_id_salt("policy")
            .selected_text(eval.policy.label())
            .show_ui(ui, |ui| {
                for p in [NormalizationPolicy::MinMax, NormalizationPolicy::MeanScaled] {
                    ui.selectable_value(&mut eval.policy, p, p.label());
                }
            });
        if eval.policy != before {
            logf!("UI: Policy → {}", eval.policy.label());
            changed = true;
        }
    });

    ui.horizontal(|ui| {
        ui.label("Minutes:");
        changed |= ui.add(DragValue::new(&mut eval.min_minutes).range(0..=MINUTES_SLIDER_MAX).speed(10)).changed();
        ui.label("to");
        changed |= ui.add(DragValue::new(&mut eval.max_minutes).range(0..=MINUTES_SLIDER_MAX).speed(10)).changed();

        ui.separator();
        ui.label("Max age:");
        changed |= ui.add(DragValue::new(&mut eval.max_age).range(0..=AGE_SLIDER_MAX)).changed();
    });

    ui.horizontal(|ui| {
        let w = &mut eval.weights;
        changed |= ui.add(Slider::new(&mut w.tier1, 0.0..=1.0).text("Tier 1")).changed();
        changed |= ui.add(Slider::new(&mut w.tier2, 0.0..=1.0).text("Tier 2")).changed();
        changed |= ui.add(Slider::new(&mut w.tier3, 0.0..=1.0).text("Tier 3")).changed();

        match eval.weights.renormalized() {
            Ok(r) if (eval.weights.sum() - 1.0).abs() > WEIGHT_TOLERANCE => {
                ui.label(
                    egui::RichText::new(format!("→ {:.2} / {:.2} / {:.2}", r.tier1, r.tier2, r.tier3)).weak(),
                )
                .on_hover_text("Weights are rescaled to sum to 1");
            }
            Ok(_) => {}
            Err(e) => {
                let err = ui.visuals().error_fg_color;
                ui.colored_label(err, e.to_string());
            }
        }
    });

    if changed {
        app.dirty = true;
    }
}
