// src/engine/filter.rs
use super::types::PlayerRecord;

/// Playing-time and age window for one evaluation pass. All bounds inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    pub min_minutes: u32,
    pub max_minutes: u32,
    pub max_age: u32,
}

impl Thresholds {
    pub fn admits(&self, rec: &PlayerRecord) -> bool {
        let minutes_ok = rec
            .minutes
            .is_some_and(|m| m >= self.min_minutes as f64 && m <= self.max_minutes as f64);
        let age_ok = rec.age.is_some_and(|a| a <= self.max_age as f64);
        minutes_ok && age_ok
    }
}

/// Records of the given positions inside the thresholds, input order kept.
/// Unknown (non-numeric) age or minutes exclude the record.
pub fn filter_players<'a>(
    players: &'a [PlayerRecord],
    codes: &[&str],
    limits: Thresholds,
) -> Vec<&'a PlayerRecord> {
    players
        .iter()
        .filter(|p| codes.contains(&p.position.trim()))
        .filter(|p| limits.admits(p))
        .collect()
}
