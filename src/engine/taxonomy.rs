// src/engine/taxonomy.rs
//
// Position groups and their metric tiers, as plain data.
//
// Each revision of the scouting sheet is one `Taxonomy` literal. Changing
// which codes belong to a group, or which metrics sit in which tier, is an
// edit to the tables below; the scorer never branches on group names.
//
// Column names are matched case-sensitively against the uploaded sheet.

use std::collections::{BTreeMap, BTreeSet};

use super::error::EvaluationError;
use super::types::TierDefinition;

/// One position group: the raw position codes it covers and its tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupSpec {
    pub name: &'static str,
    pub codes: &'static [&'static str],
    pub tiers: TierDefinition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaxonomyVersion {
    /// Nine groups; full backs split by side, midfield split in two.
    Current,
    /// Seven groups; one "Full Backs" group and one defensive midfield group.
    Legacy,
}

impl TaxonomyVersion {
    pub fn label(&self) -> &'static str {
        match self {
            TaxonomyVersion::Current => "current",
            TaxonomyVersion::Legacy => "legacy",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" | "v2" => Some(TaxonomyVersion::Current),
            "legacy" | "v1" => Some(TaxonomyVersion::Legacy),
            _ => None,
        }
    }

    pub fn taxonomy(&self) -> &'static Taxonomy {
        match self {
            TaxonomyVersion::Current => &CURRENT,
            TaxonomyVersion::Legacy => &LEGACY,
        }
    }
}

/// A fixed, ordered set of position groups.
#[derive(Debug, PartialEq, Eq)]
pub struct Taxonomy {
    pub version: TaxonomyVersion,
    pub groups: &'static [GroupSpec],
}

impl Taxonomy {
    pub fn current() -> &'static Taxonomy { &CURRENT }
    pub fn legacy() -> &'static Taxonomy { &LEGACY }

    /// Group name → position codes.
    pub fn position_groups(&self) -> BTreeMap<&'static str, BTreeSet<&'static str>> {
        self.groups
            .iter()
            .map(|g| (g.name, g.codes.iter().copied().collect()))
            .collect()
    }

    /// Group names in display order.
    pub fn group_names(&self) -> Vec<&'static str> {
        self.groups.iter().map(|g| g.name).collect()
    }

    pub fn group(&self, name: &str) -> Result<&'static GroupSpec, EvaluationError> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .ok_or_else(|| EvaluationError::UnknownPositionGroup { group: s!(name) })
    }

    pub fn tiers_for(&self, name: &str) -> Result<TierDefinition, EvaluationError> {
        self.group(name).map(|g| g.tiers)
    }

    /// Which group (if any) a raw position code belongs to.
    pub fn group_of(&self, code: &str) -> Option<&'static str> {
        self.groups
            .iter()
            .find(|g| g.codes.contains(&code))
            .map(|g| g.name)
    }
}

/// Group name → position codes, canonical taxonomy.
pub fn position_groups() -> BTreeMap<&'static str, BTreeSet<&'static str>> {
    CURRENT.position_groups()
}

/// Tier lists for a group of the canonical taxonomy.
pub fn tiers_for(group: &str) -> Result<TierDefinition, EvaluationError> {
    CURRENT.tiers_for(group)
}

/* ---------------- Tier tables ---------------- */

const GK_TIERS: TierDefinition = TierDefinition {
    tier1: &["Goals Conceded", "Saves", "Clean sheets"],
    tier2: &["Passes", "Passes accurate, %", "Long Passes", "Long Passes Completed"],
    tier3: &["Crosses", "Crosses won", "Goal Kicks", "Tackles successful"],
};

const FULL_BACK_TIERS: TierDefinition = TierDefinition {
    tier1: &["Tackles successful", "Crosses", "Dribbles successful"],
    tier2: &["Passes", "Passes accurate, %", "Key passes"],
    tier3: &["Interceptions", "Challenges", "Challenges won"],
};

const CENTRE_BACK_TIERS: TierDefinition = TierDefinition {
    tier1: &["Tackles successful", "Interceptions"],
    tier2: &["Passes", "Passes accurate, %"],
    tier3: &["Challenges", "Challenges won"],
};

const DEFENSIVE_MID_TIERS: TierDefinition = TierDefinition {
    tier1: &["Passes", "Passes accurate, %", "Tackles successful", "Interceptions"],
    tier2: &["Key passes", "Dribbles", "Dribbles successful"],
    tier3: &["Challenges", "Challenges won"],
};

const DEEP_MID_TIERS: TierDefinition = TierDefinition {
    tier1: &["Passes", "Passes accurate, %", "Key passes"],
    tier2: &["Dribbles", "Dribbles successful", "Interceptions"],
    tier3: &["Tackles successful", "Challenges", "Challenges won"],
};

const ATTACKING_MID_TIERS: TierDefinition = TierDefinition {
    tier1: &["Key passes", "Dribbles successful", "Shots on target"],
    tier2: &["Assists", "Chances created", "Shots"],
    tier3: &["Tackles successful", "Interceptions"],
};

const WINGER_TIERS: TierDefinition = TierDefinition {
    tier1: &["Key passes", "Crosses", "Dribbles successful"],
    tier2: &["Shots", "Shots on target", "Assists"],
    tier3: &["Tackles successful", "Interceptions"],
};

const FORWARD_TIERS: TierDefinition = TierDefinition {
    tier1: &["Goals", "xG per shot", "Shots on target"],
    tier2: &["Assists", "Chances created", "Key passes"],
    tier3: &["Passes", "Passes into the penalty box", "xG conversion"],
};

/* ---------------- Versions ---------------- */

static CURRENT: Taxonomy = Taxonomy {
    version: TaxonomyVersion::Current,
    groups: &[
        GroupSpec { name: "Goalkeepers",           codes: &["GK"],                                  tiers: GK_TIERS },
        GroupSpec { name: "Right Backs",           codes: &["RD", "RB", "RWB"],                     tiers: FULL_BACK_TIERS },
        GroupSpec { name: "Left Backs",            codes: &["LD", "LB", "LWB"],                     tiers: FULL_BACK_TIERS },
        GroupSpec { name: "Centre Backs",          codes: &["CD", "LCD", "RCD"],                    tiers: CENTRE_BACK_TIERS },
        GroupSpec { name: "Defensive Midfielders", codes: &["CDM", "LCDM", "RCDM"],                 tiers: DEFENSIVE_MID_TIERS },
        GroupSpec { name: "Deep Midfielders",      codes: &["LDM", "RDM", "CM", "LCM", "RCM"],      tiers: DEEP_MID_TIERS },
        GroupSpec { name: "Attacking Midfielders", codes: &["CAM"],                                 tiers: ATTACKING_MID_TIERS },
        GroupSpec { name: "Wingers",               codes: &["LM", "RM", "LCF", "RCF", "LAM", "RAM"], tiers: WINGER_TIERS },
        GroupSpec { name: "Forwards",              codes: &["CF"],                                  tiers: FORWARD_TIERS },
    ],
};

static LEGACY: Taxonomy = Taxonomy {
    version: TaxonomyVersion::Legacy,
    groups: &[
        GroupSpec { name: "Goalkeepers",           codes: &["GK"],                                  tiers: GK_TIERS },
        GroupSpec { name: "Full Backs",            codes: &["LD", "RD"],                            tiers: FULL_BACK_TIERS },
        GroupSpec { name: "Centre Backs",          codes: &["CD", "LCD", "RCD"],                    tiers: CENTRE_BACK_TIERS },
        GroupSpec { name: "Defensive Midfielders", codes: &["CDM", "RCDM", "LCDM", "LDM", "RDM"],   tiers: DEFENSIVE_MID_TIERS },
        GroupSpec { name: "Attacking Midfielders", codes: &["CAM"],                                 tiers: ATTACKING_MID_TIERS },
        GroupSpec { name: "Wingers",               codes: &["LM", "RM", "LCF", "RCF", "LAM", "RAM"], tiers: WINGER_TIERS },
        GroupSpec { name: "Forwards",              codes: &["CF"],                                  tiers: FORWARD_TIERS },
    ],
};
