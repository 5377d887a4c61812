// src/engine/scorer.rs
use std::cmp::Ordering;

use super::types::{Impact, ScoredPlayer, TierDefinition, TierWeights};

/// Impact is expressed per this many minutes.
pub const IMPACT_MINUTES: f64 = 1000.0;

/// Mean of the present normalized values of `tier`'s metrics.
/// `metrics` / `values` are the parallel required-metric list and one
/// player's normalized row. A metric listed twice in a tier counts twice.
pub fn tier_average(
    tier: &[&str],
    metrics: &[&'static str],
    values: &[Option<f64>],
) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for m in tier {
        let v = metrics
            .iter()
            .position(|x| x == m)
            .and_then(|ix| values.get(ix).copied().flatten());
        if let Some(v) = v {
            sum += v;
            n += 1;
        }
    }
    (n > 0).then(|| sum / n as f64)
}

/// All three tier averages for one player.
pub fn tier_averages(
    def: &TierDefinition,
    metrics: &[&'static str],
    values: &[Option<f64>],
) -> [Option<f64>; 3] {
    def.tiers().map(|tier| tier_average(tier, metrics, values))
}

/// Weighted sum of tier averages. `weights` must already sum to 1.
/// An undefined tier hands its weight to the defined ones in proportion;
/// with nothing defined the score is 0.
pub fn final_score(tiers: &[Option<f64>; 3], weights: &TierWeights) -> f64 {
    let w = weights.as_array();
    let mut acc = 0.0;
    let mut used = 0.0;
    for (avg, wk) in tiers.iter().zip(w) {
        if let Some(avg) = avg {
            acc += wk * avg;
            used += wk;
        }
    }
    if used > 0.0 { acc / used } else { 0.0 }
}

/// Final score per 1000 minutes played.
pub fn impact(final_score: f64, minutes: f64) -> Impact {
    if minutes > 0.0 {
        Impact::Defined(final_score / minutes * IMPACT_MINUTES)
    } else {
        Impact::Undefined
    }
}

/// Sort best first. Stable: equal scores keep input order.
pub fn rank(players: &mut [ScoredPlayer]) {
    players.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
            .then(a.row.cmp(&b.row))
    });
}
