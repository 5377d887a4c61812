// src/engine/engine.rs
use super::error::EvaluationError;
use super::filter::{filter_players, Thresholds};
use super::normalize::{available_columns, normalize_metrics, validate_presence, NormalizationPolicy};
use super::scorer::{final_score, impact, tier_averages};
use super::taxonomy::Taxonomy;
use super::types::{PlayerRecord, ScoredPlayer, TierWeights};

/// Scoring configuration that stays fixed across passes: which taxonomy
/// revision and which normalization policy. Parameters that change per
/// pass (group, thresholds, weights) go to `run`.
#[derive(Clone, Copy, Debug)]
pub struct Evaluation {
    pub taxonomy: &'static Taxonomy,
    pub policy: NormalizationPolicy,
}

impl Default for Evaluation {
    fn default() -> Self {
        Self { taxonomy: Taxonomy::current(), policy: NormalizationPolicy::MinMax }
    }
}

impl Evaluation {
    pub fn new(taxonomy: &'static Taxonomy, policy: NormalizationPolicy) -> Self {
        Self { taxonomy, policy }
    }

    /// One scoring pass. Output keeps input order; see `scorer::rank`.
    ///
    /// Order of checks: group lookup, weights, filter (empty → NoEligiblePlayers),
    /// metric presence (→ MissingMetric). No player is scored unless all pass.
    pub fn run(
        &self,
        players: &[PlayerRecord],
        group: &str,
        limits: Thresholds,
        weights: TierWeights,
    ) -> Result<Vec<ScoredPlayer>, EvaluationError> {
        let spec = self.taxonomy.group(group)?;
        let weights = weights.renormalized()?;

        let eligible = filter_players(players, spec.codes, limits);
        logd!(
            "Eval: group={} eligible={}/{} limits={:?} weights={:?}",
            group, eligible.len(), players.len(), limits, weights
        );
        if eligible.is_empty() {
            return Err(EvaluationError::NoEligiblePlayers {
                group: s!(group),
                min_minutes: limits.min_minutes,
                max_minutes: limits.max_minutes,
                max_age: limits.max_age,
            });
        }

        let metrics = spec.tiers.required_metrics();
        validate_presence(group, &metrics, &available_columns(players))?;

        let overlap = spec.tiers.overlapping_metrics();
        if !overlap.is_empty() {
            logd!("Eval: {} lists metrics in several tiers: {:?}", group, overlap);
        }

        let matrix = normalize_metrics(&eligible, &metrics, self.policy);

        let scored = eligible
            .iter()
            .zip(matrix)
            .map(|(rec, values)| {
                let tiers = tier_averages(&spec.tiers, &metrics, &values);
                let score = final_score(&tiers, &weights);
                // Filter guarantees both are known.
                let minutes = rec.minutes.unwrap_or_default();
                ScoredPlayer {
                    row: rec.row,
                    name: rec.name.clone(),
                    team: rec.team.clone(),
                    position: rec.position.clone(),
                    age: rec.age.unwrap_or_default(),
                    minutes,
                    normalized: metrics.iter().copied().zip(values).collect(),
                    tiers,
                    final_score: score,
                    impact: impact(score, minutes),
                }
            })
            .collect::<Vec<_>>();

        logf!("Eval: scored {} player(s) for {}", scored.len(), group);
        Ok(scored)
    }
}

/// Score `players` for `group` with the canonical taxonomy and min-max scaling.
pub fn evaluate(
    players: &[PlayerRecord],
    group: &str,
    min_minutes: u32,
    max_minutes: u32,
    max_age: u32,
    weights: TierWeights,
) -> Result<Vec<ScoredPlayer>, EvaluationError> {
    Evaluation::default().run(
        players,
        group,
        Thresholds { min_minutes, max_minutes, max_age },
        weights,
    )
}
