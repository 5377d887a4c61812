// src/engine/types.rs
use std::collections::BTreeMap;

use super::error::EvaluationError;

/// Raw cell as it arrived from ingestion. Spreadsheets give us text;
/// programmatic callers may hand over numbers directly.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    Text(String),
    Number(f64),
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self { RawValue::Text(s!(s)) }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self { RawValue::Text(s) }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self { RawValue::Number(v) }
}

/// One input row. Never mutated by the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerRecord {
    /// Position in the input table; breaks ranking ties.
    pub row: usize,
    pub name: String,
    pub team: String,
    /// `None` when the cell was not numeric ("unknown" → filtered out).
    pub age: Option<f64>,
    pub minutes: Option<f64>,
    pub position: String,
    pub metrics: BTreeMap<String, RawValue>,
}

impl PlayerRecord {
    pub fn new(row: usize, name: &str, team: &str, position: &str) -> Self {
        Self {
            row,
            name: s!(name),
            team: s!(team),
            age: None,
            minutes: None,
            position: s!(position),
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_age(mut self, age: f64) -> Self { self.age = Some(age); self }
    pub fn with_minutes(mut self, minutes: f64) -> Self { self.minutes = Some(minutes); self }

    pub fn with_metric(mut self, name: &str, value: impl Into<RawValue>) -> Self {
        self.metrics.insert(s!(name), value.into());
        self
    }
}

/// The three metric lists of one position group, most important first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierDefinition {
    pub tier1: &'static [&'static str],
    pub tier2: &'static [&'static str],
    pub tier3: &'static [&'static str],
}

impl TierDefinition {
    pub fn tiers(&self) -> [&'static [&'static str]; 3] {
        [self.tier1, self.tier2, self.tier3]
    }

    /// Every metric the group needs, in tier order, first occurrence only.
    /// A metric listed in two tiers still counts twice when averaging.
    pub fn required_metrics(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for m in self.tier1.iter().chain(self.tier2).chain(self.tier3) {
            if !out.contains(m) { out.push(m); }
        }
        out
    }

    /// Metrics appearing in more than one tier.
    pub fn overlapping_metrics(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        for m in self.required_metrics() {
            let hits = self.tiers().iter().filter(|t| t.contains(&m)).count();
            if hits > 1 { out.push(m); }
        }
        out
    }
}

/// Relative importance of the three tiers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierWeights {
    pub tier1: f64,
    pub tier2: f64,
    pub tier3: f64,
}

/// Sums closer than this to 1.0 are left alone.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

impl TierWeights {
    pub const fn new(tier1: f64, tier2: f64, tier3: f64) -> Self {
        Self { tier1, tier2, tier3 }
    }

    pub fn as_array(&self) -> [f64; 3] { [self.tier1, self.tier2, self.tier3] }

    pub fn sum(&self) -> f64 { self.tier1 + self.tier2 + self.tier3 }

    /// Reject negative, non-finite or all-zero weights.
    pub fn validate(&self) -> Result<(), EvaluationError> {
        for (i, w) in self.as_array().iter().enumerate() {
            if !w.is_finite() {
                return Err(EvaluationError::InvalidWeights {
                    reason: format!("Tier {} weight is not a finite number", i + 1),
                });
            }
            if *w < 0.0 {
                return Err(EvaluationError::InvalidWeights {
                    reason: format!("Tier {} weight is negative ({w})", i + 1),
                });
            }
        }
        if self.sum() <= 0.0 {
            return Err(EvaluationError::InvalidWeights {
                reason: s!("weights sum to zero"),
            });
        }
        Ok(())
    }

    /// Validated copy scaled so the three weights sum to 1.0.
    pub fn renormalized(&self) -> Result<TierWeights, EvaluationError> {
        self.validate()?;
        let sum = self.sum();
        if (sum - 1.0).abs() <= WEIGHT_TOLERANCE {
            return Ok(*self);
        }
        Ok(TierWeights::new(self.tier1 / sum, self.tier2 / sum, self.tier3 / sum))
    }
}

impl Default for TierWeights {
    fn default() -> Self { TierWeights::new(0.6, 0.3, 0.1) }
}

/// Final score per 1000 minutes, or undefined for zero-minute players.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Impact {
    Defined(f64),
    Undefined,
}

impl Impact {
    pub fn value(&self) -> Option<f64> {
        match self {
            Impact::Defined(v) => Some(*v),
            Impact::Undefined => None,
        }
    }
}

/// A record after one scoring pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredPlayer {
    pub row: usize,
    pub name: String,
    pub team: String,
    pub position: String,
    pub age: f64,
    pub minutes: f64,
    /// (metric, normalized value) in required-metric order.
    pub normalized: Vec<(&'static str, Option<f64>)>,
    /// `None` when the player had no value for any metric of that tier.
    pub tiers: [Option<f64>; 3],
    pub final_score: f64,
    pub impact: Impact,
}

impl ScoredPlayer {
    pub fn tier(&self, k: usize) -> Option<f64> {
        self.tiers.get(k).copied().flatten()
    }

    pub fn normalized_value(&self, metric: &str) -> Option<f64> {
        self.normalized
            .iter()
            .find(|(m, _)| *m == metric)
            .and_then(|(_, v)| *v)
    }

    pub fn impact_per_minute(&self) -> Result<f64, EvaluationError> {
        self.impact.value().ok_or_else(|| EvaluationError::UndefinedImpact {
            player: self.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_rescale_to_one() {
        let w = TierWeights::new(2.0, 1.0, 1.0).renormalized().unwrap();
        assert_eq!(w, TierWeights::new(0.5, 0.25, 0.25));
        assert_eq!(TierWeights::default().renormalized().unwrap(), TierWeights::default());
    }

    #[test]
    fn bad_weights_name_the_tier() {
        let err = TierWeights::new(0.5, f64::NAN, 0.5).validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid tier weights: Tier 2 weight is not a finite number");
        assert!(TierWeights::new(0.0, 0.0, 0.0).renormalized().is_err());
    }

    #[test]
    fn zero_minute_player_has_no_impact_rate() {
        let p = ScoredPlayer {
            row: 0,
            name: s!("Ana"),
            team: s!("FC"),
            position: s!("CF"),
            age: 20.0,
            minutes: 0.0,
            normalized: vec![("Goals", Some(4.0)), ("Assists", None)],
            tiers: [Some(4.0), None, None],
            final_score: 4.0,
            impact: Impact::Undefined,
        };
        assert_eq!(p.impact_per_minute(), Err(EvaluationError::UndefinedImpact { player: s!("Ana") }));
        assert_eq!(p.normalized_value("Goals"), Some(4.0));
        assert_eq!(p.normalized_value("Assists"), None);
        assert_eq!(p.tier(1), None);
    }
}
