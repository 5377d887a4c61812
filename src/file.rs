// src/file.rs
//
// Ranked scores → text table → file(s) / clipboard.

use std::{
    collections::HashMap,
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, ExportType};
use crate::core::sanitize::sanitize_team_filename;
use crate::csv::to_export_string;
use crate::engine::ScoredPlayer;

pub const SCORE_HEADERS: [&str; 11] = [
    "Rank", "Player", "Team", "Position", "Age", "Minutes played",
    "Tier 1", "Tier 2", "Tier 3", "Final Score", "Impact per 1000'",
];

/// Column holding the team name in `score_table` rows.
pub const TEAM_COL: usize = 2;

fn whole_or_decimal(v: f64) -> String {
    if v.fract() == 0.0 { format!("{}", v as i64) } else { format!("{v:.1}") }
}

/// Header + string rows for ranked players. `players` must already be in
/// presentation order; rank is the 1-based position.
pub fn score_table(players: &[ScoredPlayer], include_metrics: bool) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers: Vec<String> = SCORE_HEADERS.iter().map(|h| s!(*h)).collect();
    if include_metrics {
        if let Some(first) = players.first() {
            headers.extend(first.normalized.iter().map(|(m, _)| join!(*m, " (norm)")));
        }
    }

    let rows = players
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let mut row = vec![
                (i + 1).to_string(),
                p.name.clone(),
                p.team.clone(),
                p.position.clone(),
                whole_or_decimal(p.age),
                whole_or_decimal(p.minutes),
                num!(p.tier(0), 2),
                num!(p.tier(1), 2),
                num!(p.tier(2), 2),
                format!("{:.2}", p.final_score),
                match p.impact_per_minute() {
                    Ok(v) => format!("{v:.2}"),
                    Err(e) => { logd!("Export: {}", e); s!("Undefined") }
                },
            ];
            if include_metrics {
                row.extend(p.normalized.iter().map(|(_, v)| num!(v, 2)));
            }
            row
        })
        .collect();

    (headers, rows)
}

/// Full text for Copy / single-file export.
pub fn scores_to_string(export: &ExportOptions, players: &[ScoredPlayer]) -> String {
    let (h, r) = score_table(players, export.include_metrics);
    to_export_string(&h, &r, export.include_headers, export.delimiter())
}

/// Write one file at `export.out_path()`. Returns the path written to.
pub fn write_export_single(
    export: &ExportOptions,
    players: &[ScoredPlayer],
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, scores_to_string(export, players))?;
    Ok(path)
}

/// One file per team inside the directory `export.out_path()`.
/// Ranks stay global (a team file shows where its players sit overall).
pub fn write_export_per_team(
    export: &ExportOptions,
    players: &[ScoredPlayer],
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let outdir = export.out_path();
    ensure_directory(&outdir)?;

    let (headers, rows) = score_table(players, export.include_metrics);

    // Group rows by team, first appearance order
    let mut order: Vec<String> = Vec::new();
    let mut by_team: HashMap<String, Vec<Vec<String>>> = HashMap::new();
    for r in rows {
        let team = r.get(TEAM_COL).cloned().unwrap_or_default();
        if !by_team.contains_key(&team) { order.push(team.clone()); }
        by_team.entry(team).or_default().push(r);
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(order.len());
    let ext = export.format.ext();

    for (n, team) in order.iter().enumerate() {
        let stem = sanitize_team_filename(team, n);
        let path = resolve_team_filename(&outdir, &stem, &mut seen, ext);
        let contents = to_export_string(
            &headers,
            &by_team[team],
            export.include_headers,
            export.delimiter(),
        );
        fs::write(&path, contents)?;
        written.push(path);
    }

    Ok(written)
}

/// Dispatch on export type.
pub fn export_scores(
    export: &ExportOptions,
    players: &[ScoredPlayer],
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    if players.is_empty() {
        return Err("Nothing to export".into());
    }
    let res = match export.export_type {
        ExportType::SingleFile => write_export_single(export, players).map(|p| vec![p]),
        ExportType::PerTeam => write_export_per_team(export, players),
    };
    match &res {
        Ok(paths) => logf!("Export: OK count={} type={:?}", paths.len(), export.export_type),
        Err(e) => loge!("Export: Error: {}", e),
    }
    res
}

/// Create `dir` (and parents) unless it already exists as a directory.
pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(format!("Not a directory: {}", dir.display()).into()),
        Err(_) => Ok(fs::create_dir_all(dir)?),
    }
}

/// `<stem>.<ext>` the first time a stem is seen in this export,
/// `<stem> (2).<ext>`, `<stem> (3).<ext>`… afterwards.
pub fn resolve_team_filename(
    dir: &Path,
    stem: &str,
    seen: &mut HashMap<String, usize>,
    ext: &str,
) -> PathBuf {
    let n = seen.entry(s!(stem)).and_modify(|n| *n += 1).or_insert(1);
    match *n {
        1 => dir.join(format!("{stem}.{ext}")),
        k => dir.join(format!("{stem} ({k}).{ext}")),
    }
}
