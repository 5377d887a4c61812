// src/gui/table_model.rs
//! Display model for the score table.
//!
//! Built from the ranked `ScoredPlayer`s through the same `score_table`
//! the export path uses, so what is on screen is what gets copied. The
//! only view-side transform is an optional column sort; the Rank column
//! keeps the global ranking either way.

use std::cmp::Ordering;

use crate::engine::ScoredPlayer;
use crate::file::score_table;

/// Columns rendered left-aligned; everything else is numeric.
const TEXT_COLS: [usize; 3] = [1, 2, 3];

#[derive(Clone, Debug, Default)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Input row of each display row (highlight key).
    pub row_ids: Vec<usize>,
}

impl TableData {
    pub fn from_scored(players: &[ScoredPlayer], include_metrics: bool) -> Self {
        let (headers, rows) = score_table(players, include_metrics);
        let row_ids = players.iter().map(|p| p.row).collect();
        Self { headers, rows, row_ids }
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn ncols(&self) -> usize { self.headers.len() }
    pub fn nrows(&self) -> usize { self.rows.len() }

    pub fn is_numeric(&self, col: usize) -> bool { !TEXT_COLS.contains(&col) }

    /// Stable sort by one column. Numeric columns compare as numbers with
    /// blanks and "Undefined" last.
    pub fn sort_by(&mut self, col: usize, descending: bool) {
        if col >= self.ncols() { return; }
        let numeric = self.is_numeric(col);

        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        order.sort_by(|&a, &b| {
            let (x, y) = (&self.rows[a][col], &self.rows[b][col]);
            if numeric {
                match (x.parse::<f64>().ok(), y.parse::<f64>().ok()) {
                    (Some(x), Some(y)) => {
                        let o = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
                        if descending { o.reverse() } else { o }
                    }
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            } else {
                let o = x.to_lowercase().cmp(&y.to_lowercase());
                if descending { o.reverse() } else { o }
            }
        });

        self.rows = order.iter().map(|&i| self.rows[i].clone()).collect();
        self.row_ids = order.iter().map(|&i| self.row_ids[i]).collect();
    }
}
