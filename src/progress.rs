// src/progress.rs
//
// Status hooks for loading several input files. The CLI prints them to
// stderr, the GUI writes them into its status line. Every hook is optional.

pub trait Progress {
    /// Number of files about to be read.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status text.
    fn log(&mut self, _msg: &str) {}

    /// File at `index` (0-based) parsed.
    fn item_done(&mut self, _index: usize) {}

    /// Load aborted; nothing was merged.
    fn fail(&mut self, _reason: &str) {}

    /// Load complete.
    fn finish(&mut self) {}
}

/// Discards everything.
pub struct NullProgress;
impl Progress for NullProgress {}
