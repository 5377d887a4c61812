// src/data.rs
//
// Bridge from an ingested table to engine records.
//
// Identity columns are fixed by the stats provider's export format; every
// other column rides along as a metric. The engine decides later which
// metrics it needs.

use crate::engine::{EvaluationError, PlayerRecord, RawValue, Taxonomy};
use crate::core::sanitize::normalize_ws;
use crate::store::DataSet;

pub const COL_PLAYER: &str = "Player";
pub const COL_TEAM: &str = "Team";
pub const COL_AGE: &str = "Age";
pub const COL_MINUTES: &str = "Minutes played";
pub const COL_POSITION: &str = "Position";

pub const IDENTITY_COLUMNS: [&str; 5] = [COL_PLAYER, COL_TEAM, COL_AGE, COL_MINUTES, COL_POSITION];

/// Numeric attribute: a plain number or nothing. Placeholders and junk
/// mean "unknown" here, unlike metric cells.
fn parse_attr(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Build records in table order. Fails if any identity column is absent.
pub fn records_from_dataset(ds: &DataSet) -> Result<Vec<PlayerRecord>, EvaluationError> {
    let missing: Vec<String> = IDENTITY_COLUMNS
        .iter()
        .filter(|c| ds.column(c).is_none())
        .map(|c| s!(*c))
        .collect();
    if !missing.is_empty() {
        return Err(EvaluationError::MissingColumns { columns: missing });
    }

    let metric_cols: Vec<(usize, &String)> = ds
        .headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !h.is_empty() && !IDENTITY_COLUMNS.contains(&h.as_str()))
        .collect();

    let records = (0..ds.rows.len())
        .map(|i| {
            let get = |name: &str| ds.cell(i, name).unwrap_or("");
            let mut rec = PlayerRecord::new(
                i,
                &normalize_ws(get(COL_PLAYER)),
                &normalize_ws(get(COL_TEAM)),
                get(COL_POSITION).trim(),
            );
            rec.age = parse_attr(get(COL_AGE));
            rec.minutes = parse_attr(get(COL_MINUTES));

            let row = &ds.rows[i];
            for (ci, name) in &metric_cols {
                let cell = row.get(*ci).cloned().unwrap_or_default();
                rec.metrics.insert((*name).clone(), RawValue::Text(cell));
            }
            rec
        })
        .collect();

    Ok(records)
}

/// Rows whose position code no group of the taxonomy claims.
pub fn unclaimed_positions(records: &[PlayerRecord], taxonomy: &Taxonomy) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for r in records {
        if taxonomy.group_of(&r.position).is_none() && !out.contains(&r.position) {
            out.push(r.position.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::normalize::coerce;
    use crate::store::parse_table;

    fn metric_value(rec: &PlayerRecord, metric: &str) -> Option<f64> {
        rec.metrics.get(metric).and_then(coerce)
    }

    #[test]
    fn builds_records_with_metrics() {
        let ds = parse_table(
            "Player,Team,Age,Minutes played,Position,Goals,\"Passes accurate, %\"\n\
             Ana,FC A,24,1500,CF,7,81%\n\
             Bia,FC B,unknown,900,CF,-,\n",
        );
        let recs = records_from_dataset(&ds).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].age, Some(24.0));
        assert_eq!(recs[0].minutes, Some(1500.0));
        assert_eq!(metric_value(&recs[0], "Passes accurate, %"), Some(81.0));
        assert_eq!(recs[1].age, None);
        assert_eq!(metric_value(&recs[1], "Goals"), Some(0.0));
        assert_eq!(metric_value(&recs[1], "Passes accurate, %"), None);
        assert!(!recs[0].metrics.contains_key("Team"));
    }

    #[test]
    fn missing_identity_columns_listed_together() {
        let ds = parse_table("Player,Goals\nAna,3\n");
        let err = records_from_dataset(&ds).unwrap_err();
        assert_eq!(
            err,
            EvaluationError::MissingColumns {
                columns: vec![s!("Team"), s!("Age"), s!("Minutes played"), s!("Position")],
            }
        );
    }

    #[test]
    fn unknown_position_codes_reported_once() {
        let recs = vec![
            PlayerRecord::new(0, "Ana", "T", "CF"),
            PlayerRecord::new(1, "Bea", "T", "SW"),
            PlayerRecord::new(2, "Cid", "T", "SW"),
        ];
        assert_eq!(unclaimed_positions(&recs, Taxonomy::current()), vec![s!("SW")]);
    }
}
