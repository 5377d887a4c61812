// src/config/consts.rs

// Local state
pub const STORE_DIR: &str = ".scout";
pub const LOG_FILE: &str = ".scout/debug.log";
pub const SETTINGS_FILE: &str = "scout_score.cfg";

// Evaluation defaults
pub const DEFAULT_GROUP: &str = "Forwards";
pub const DEFAULT_MIN_MINUTES: u32 = 200;
pub const DEFAULT_MAX_MINUTES: u32 = 10_000;
pub const DEFAULT_MAX_AGE: u32 = 40;
pub const DEFAULT_WEIGHTS: (f64, f64, f64) = (0.6, 0.3, 0.1);

// GUI bounds
pub const MINUTES_SLIDER_MAX: u32 = 10_000;
pub const AGE_SLIDER_MAX: u32 = 50;
pub const CHART_TOP_N: usize = 15;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_SCORES_SUBDIR: &str = "scores";
pub const DEFAULT_FILE: &str = "ranking";
