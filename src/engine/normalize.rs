// src/engine/normalize.rs
//
// Cell coercion and per-metric rescaling.
//
// Coercion never fails: a sheet full of typos still scores, with the bad
// cells counted as zero. Only a missing *column* stops a pass (see
// `validate_presence`).

use std::collections::BTreeSet;

use super::error::EvaluationError;
use super::types::{PlayerRecord, RawValue};

/// Placeholder the stats provider writes for "no value".
pub const NO_VALUE_TOKEN: &str = "-";

/// Upper end of the common scale.
pub const SCALE_MAX: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NormalizationPolicy {
    /// `(v - min) / (max - min) * 10`, bounded to [0, 10].
    #[default]
    MinMax,
    /// `v / mean * 10`, unbounded above. Kept for parity with older sheets.
    MeanScaled,
}

impl NormalizationPolicy {
    pub fn label(&self) -> &'static str {
        match self {
            NormalizationPolicy::MinMax => "minmax",
            NormalizationPolicy::MeanScaled => "mean",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minmax" | "min-max" => Some(NormalizationPolicy::MinMax),
            "mean" | "mean-scaled" => Some(NormalizationPolicy::MeanScaled),
            _ => None,
        }
    }
}

/// Coerce one cell.
/// - empty / whitespace → `None` (no data, excluded from averages)
/// - `-` → 0
/// - trailing `%` stripped
/// - anything unparseable or non-finite → 0
pub fn coerce(raw: &RawValue) -> Option<f64> {
    match raw {
        RawValue::Number(v) => Some(if v.is_finite() { *v } else { 0.0 }),
        RawValue::Text(s) => {
            let t = s.trim();
            if t.is_empty() { return None; }
            if t == NO_VALUE_TOKEN { return Some(0.0); }
            let t = t.strip_suffix('%').unwrap_or(t).trim();
            match t.parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => Some(0.0),
            }
        }
    }
}

/// Column names present anywhere in the table.
pub fn available_columns(players: &[PlayerRecord]) -> BTreeSet<&str> {
    players
        .iter()
        .flat_map(|p| p.metrics.keys().map(|k| k.as_str()))
        .collect()
}

/// Fail with every absent metric at once, in tier order.
pub fn validate_presence(
    group: &str,
    required: &[&'static str],
    columns: &BTreeSet<&str>,
) -> Result<(), EvaluationError> {
    let missing: Vec<String> = required
        .iter()
        .filter(|m| !columns.contains(**m))
        .map(|m| s!(*m))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(EvaluationError::MissingMetric { group: s!(group), metrics: missing })
    }
}

/// Rescale one column onto the 0–10 scale. Absent cells stay absent.
/// Constant columns (and columns with no values at all) become all zeros.
pub fn rescale(values: &[Option<f64>], policy: NormalizationPolicy) -> Vec<Option<f64>> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return values.to_vec();
    }

    match policy {
        NormalizationPolicy::MinMax => {
            // Work on halves so `max - min` stays finite for any finite cells.
            let lo = present.iter().copied().fold(f64::INFINITY, f64::min) / 2.0;
            let hi = present.iter().copied().fold(f64::NEG_INFINITY, f64::max) / 2.0;
            let range = hi - lo;
            values
                .iter()
                .map(|v| v.map(|x| {
                    if range > 0.0 {
                        ((x / 2.0 - lo) / range * SCALE_MAX).clamp(0.0, SCALE_MAX)
                    } else {
                        0.0
                    }
                }))
                .collect()
        }
        NormalizationPolicy::MeanScaled => {
            let n = present.len() as f64;
            let mean = present.iter().map(|x| x / n).sum::<f64>();
            values
                .iter()
                .map(|v| v.map(|x| if mean != 0.0 { x / mean * SCALE_MAX } else { 0.0 }))
                .collect()
        }
    }
}

/// Normalized matrix for the filtered population: one row per player,
/// one column per metric in `metrics` order.
pub fn normalize_metrics(
    players: &[&PlayerRecord],
    metrics: &[&'static str],
    policy: NormalizationPolicy,
) -> Vec<Vec<Option<f64>>> {
    let mut out = vec![Vec::with_capacity(metrics.len()); players.len()];

    for metric in metrics {
        let raw: Vec<Option<f64>> = players
            .iter()
            .map(|p| p.metrics.get(*metric).and_then(coerce))
            .collect();
        for (row, v) in out.iter_mut().zip(rescale(&raw, policy)) {
            row.push(v);
        }
    }
    out
}
