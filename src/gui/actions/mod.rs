// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy, export, add_sources, clear_sources}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod load;    // src/gui/actions/load.rs

pub use copy::copy;
pub use export::export;
pub use load::{add_sources, clear_sources};
