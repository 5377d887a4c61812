// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,
    /// Text in the "add file" field
    pub source_path_text: String,
    /// Row (input order) highlighted in the table/chart
    pub highlighted_row: Option<usize>,
    pub show_chart: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200,
            window_h: 760,
            source_path_text: s!(),
            highlighted_row: None,
            show_chart: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
