// src/engine/mod.rs
//! Scoring core: taxonomy, filter, normalizer, scorer.
//!
//! Pure and synchronous. Every pass borrows the input records and allocates
//! its own derived values, so passes over one table can run side by side.

pub mod types;
pub mod error;
pub mod taxonomy;
pub mod filter;
pub mod normalize;
pub mod scorer;
mod engine;

pub use engine::{evaluate, Evaluation};
pub use error::EvaluationError;
pub use filter::Thresholds;
pub use normalize::NormalizationPolicy;
pub use scorer::rank;
pub use taxonomy::{position_groups, tiers_for, Taxonomy, TaxonomyVersion};
pub use types::{Impact, PlayerRecord, RawValue, ScoredPlayer, TierDefinition, TierWeights};
