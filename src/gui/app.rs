// src/gui/app.rs
use std::{
    error::Error,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        consts::SETTINGS_FILE,
        options::AppOptions,
        persist,
        state::AppState,
    },
    engine::{rank, Evaluation, PlayerRecord, ScoredPlayer},
    store::Sources,
};

use super::table_model::TableData;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let settings_path = PathBuf::from(SETTINGS_FILE);
    let opts = persist::load(&settings_path);
    eframe::run_native(
        "Scout Score",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(opts, settings_path)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded inputs
    pub sources: Sources,
    pub records: Vec<PlayerRecord>,

    // latest ranked result + its display model
    pub scored: Vec<ScoredPlayer>,
    pub table: TableData,
    /// (column, descending) chosen by clicking a header
    pub sort: Option<(usize, bool)>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,

    // parameters changed since the last scoring pass
    pub dirty: bool,

    settings_path: PathBuf,
    saved_options: AppOptions,
}

impl App {
    pub fn new(options: AppOptions, settings_path: PathBuf) -> Self {
        let out_path_text = options.export.out_path().to_string_lossy().into_owned();
        logf!("Init: group={} taxonomy={}", options.eval.group, options.eval.taxonomy.label());

        Self {
            state: AppState { options: options.clone(), ..AppState::default() },
            sources: Sources::default(),
            records: Vec::new(),
            scored: Vec::new(),
            table: TableData::default(),
            sort: None,
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Load a CSV/TSV export to begin"))),
            dirty: false,
            settings_path,
            saved_options: options,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Score the loaded records with the current parameters.
    pub fn recompute(&mut self) {
        self.dirty = false;
        if self.records.is_empty() {
            self.scored.clear();
            self.rebuild_view();
            return;
        }

        let eval = &self.state.options.eval;
        let engine = Evaluation::new(eval.taxonomy.taxonomy(), eval.policy);

        match engine.run(&self.records, &eval.group, eval.thresholds(), eval.weights) {
            Ok(mut scored) => {
                rank(&mut scored);
                self.status(format!("{}: {} player(s) scored", eval.group, scored.len()));
                self.scored = scored;
            }
            Err(e) if !e.is_fatal() => {
                logd!("Eval: {}", e);
                self.status(e.to_string());
                self.scored.clear();
            }
            Err(e) => {
                loge!("Eval: {}", e);
                self.status(format!("Error: {e}"));
                self.scored.clear();
            }
        }
        self.rebuild_view();
    }

    /// Refresh the table model from `scored` (keeps the chosen sort).
    pub fn rebuild_view(&mut self) {
        let mut table = TableData::from_scored(&self.scored, self.state.options.export.include_metrics);
        if let Some((col, desc)) = self.sort {
            table.sort_by(col, desc);
        }
        self.table = table;

        let hl = self.state.gui.highlighted_row;
        if hl.is_some_and(|r| !self.table.row_ids.contains(&r)) {
            self.state.gui.highlighted_row = None;
        }
    }

    /// Persist options when they changed since the last save.
    fn save_settings_if_changed(&mut self) {
        if self.state.options == self.saved_options { return; }
        match persist::save(&self.settings_path, &self.state.options) {
            Ok(()) => logd!("Config: Saved {}", self.settings_path.display()),
            Err(e) => loge!("Config: Save failed {}: {}", self.settings_path.display(), e),
        }
        self.saved_options = self.state.options.clone();
    }

    fn take_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw.dropped_files.iter().filter_map(|f| f.path.clone()).collect()
        });
        if !dropped.is_empty() {
            logf!("UI: {} file(s) dropped", dropped.len());
            super::actions::add_sources(self, dropped);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.take_dropped_files(ctx);

        egui::SidePanel::left("sources")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                super::components::source_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::controls::draw(ui, self);

            ui.separator();

            super::components::action_buttons::draw(ui, self);

            ui.separator();

            if self.state.gui.show_chart {
                super::components::chart::draw(ui, self);
                ui.separator();
            }

            super::components::data_table::draw(ui, self);
        });

        if self.dirty {
            self.recompute();
        }
        self.save_settings_if_changed();
    }
}
