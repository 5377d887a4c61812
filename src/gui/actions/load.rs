// src/gui/actions/load.rs
use std::path::PathBuf;

use crate::{
    data::{records_from_dataset, unclaimed_positions},
    gui::{app::App, progress::GuiProgress},
    store::{self, Sources},
};

/// Append `paths` to the current sources and reload everything. On any
/// failure the previous sources stay in place.
pub fn add_sources(app: &mut App, paths: Vec<PathBuf>) {
    let mut all = app.sources.paths.clone();
    for p in paths {
        if !all.contains(&p) { all.push(p); }
    }

    logf!("Load: Begin files={}", all.len());
    let mut prog = GuiProgress::new(app.status.clone());

    let loaded = store::load_sources(&all, Some(&mut prog))
        .and_then(|src| {
            let records = records_from_dataset(&src.table)?;
            Ok((src, records))
        });

    match loaded {
        Ok((src, records)) => {
            let taxonomy = app.state.options.eval.taxonomy.taxonomy();
            let orphans = unclaimed_positions(&records, taxonomy);
            if !orphans.is_empty() {
                logd!("Load: Positions outside any group: {:?}", orphans);
            }
            logf!("Load: OK files={} players={}", src.paths.len(), records.len());

            app.sources = src;
            app.records = records;
            app.state.gui.source_path_text.clear();
            app.state.gui.highlighted_row = None;
            app.recompute();
        }
        Err(e) => {
            loge!("Load: Error: {}", e);
            app.status(format!("Load failed: {e}"));
        }
    }
}

pub fn clear_sources(app: &mut App) {
    logf!("Load: Cleared {} file(s)", app.sources.paths.len());
    app.sources = Sources::default();
    app.records.clear();
    app.state.gui.highlighted_row = None;
    app.recompute();
    app.status("Sources cleared");
}
