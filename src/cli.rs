// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::consts::SETTINGS_FILE;
use crate::config::options::{AppOptions, ExportFormat, ExportType};
use crate::config::persist;
use crate::data::{records_from_dataset, unclaimed_positions};
use crate::engine::{rank, Evaluation, NormalizationPolicy, ScoredPlayer, TaxonomyVersion, TierWeights};
use crate::file::{export_scores, score_table};
use crate::progress::Progress;
use crate::store::load_sources;

const HELP: &str = "\
Usage: cli -i <file> [-i <file> ...] --group <name> [options]

  -i, --input <file>      CSV/TSV statistics export (repeatable)
  -g, --group <name>      position group to score
      --min-minutes N     minimum minutes played (inclusive)
      --max-minutes N     maximum minutes played (inclusive)
      --max-age N         maximum age (inclusive)
      --weights a,b,c     tier weights (renormalized if they do not sum to 1)
      --taxonomy V        current | legacy
      --policy P          minmax | mean
      --top N             print only the first N rows
  -o, --out <path>        write the full ranking to a file (directory with --per-team)
      --format F          csv | tsv
      --no-headers        omit the header row in the export
      --metrics           append normalized metric columns
      --per-team          one export file per team
      --config <file>     settings file (default: scout_score.cfg if present)
      --list-groups       print groups, position codes and tiers, then exit
  -h, --help              this text";

/// Parsed command line. `opts` starts from the settings file and takes
/// overrides from flags.
#[derive(Debug, Default)]
pub struct Params {
    pub inputs: Vec<PathBuf>,
    pub opts: AppOptions,
    pub top: Option<usize>,
    pub out: Option<PathBuf>,
    pub list_groups: bool,
}

/// stderr status lines.
struct CliProgress {
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn item_done(&mut self, index: usize) { eprintln!("  [{}/{}] ok", index + 1, self.total); }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let params = parse_args(&args)?;
    run_with(&params)
}

/// Load, score, print and export for already parsed flags.
pub fn run_with(params: &Params) -> Result<(), Box<dyn Error>> {

    if params.list_groups {
        print_groups(params.opts.eval.taxonomy);
        return Ok(());
    }
    if params.inputs.is_empty() {
        return Err("No input files (use -i <file>)".into());
    }

    let mut progress = CliProgress { total: 0 };
    let sources = load_sources(&params.inputs, Some(&mut progress))?;
    let records = records_from_dataset(&sources.table)?;

    let eval = &params.opts.eval;
    let taxonomy = eval.taxonomy.taxonomy();
    for code in unclaimed_positions(&records, taxonomy) {
        eprintln!("note: position {code:?} belongs to no group");
    }

    let engine = Evaluation::new(taxonomy, eval.policy);
    let mut scored = match engine.run(&records, &eval.group, eval.thresholds(), eval.weights) {
        Ok(v) => v,
        Err(e) if !e.is_fatal() => {
            println!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    rank(&mut scored);

    let shown = match params.top {
        Some(n) => &scored[..n.min(scored.len())],
        None => &scored[..],
    };
    print_table(shown, params.opts.export.include_metrics);

    if params.out.is_some() {
        let paths = export_scores(&params.opts.export, &scored)?;
        for p in paths {
            eprintln!("wrote {}", p.display());
        }
    }
    Ok(())
}

/// Flags → `Params`. `--config` is honored before any other flag applies.
pub fn parse_args(args: &[String]) -> Result<Params, Box<dyn Error>> {
    let config = args
        .iter()
        .position(|a| a == "--config")
        .map(|i| args.get(i + 1).map(PathBuf::from).ok_or("Missing value for --config"))
        .transpose()?;

    let mut params = Params {
        opts: match &config {
            Some(path) => persist::load(path),
            None => persist::load(&PathBuf::from(SETTINGS_FILE)),
        },
        ..Params::default()
    };

    let mut weights_given: Option<TierWeights> = None;
    let mut it = args.iter();
    while let Some(a) = it.next() {
        let flag = a.as_str();
        let mut value = |flag: &str| -> Result<String, Box<dyn Error>> {
            it.next().cloned().ok_or_else(|| format!("Missing value for {flag}").into())
        };
        match flag {
            "-i" | "--input" => params.inputs.push(PathBuf::from(value(flag)?)),
            "-g" | "--group" => params.opts.eval.group = value(flag)?,
            "--min-minutes" => params.opts.eval.min_minutes = value(flag)?.parse()?,
            "--max-minutes" => params.opts.eval.max_minutes = value(flag)?.parse()?,
            "--max-age" => params.opts.eval.max_age = value(flag)?.parse()?,
            "--weights" => weights_given = Some(parse_weights(&value(flag)?)?),
            "--taxonomy" => {
                let v = value(flag)?;
                let version = TaxonomyVersion::parse(&v).ok_or_else(|| format!("Unknown taxonomy: {v}"))?;
                params.opts.eval.taxonomy = version;
            }
            "--policy" => {
                let v = value(flag)?;
                params.opts.eval.policy =
                    NormalizationPolicy::parse(&v).ok_or_else(|| format!("Unknown policy: {v}"))?;
            }
            "--top" => params.top = Some(value(flag)?.parse()?),
            "-o" | "--out" => params.out = Some(PathBuf::from(value(flag)?)),
            "--format" => {
                params.opts.export.format = match value(flag)?.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {other}").into()),
                };
            }
            "--no-headers" => params.opts.export.include_headers = false,
            "--metrics" => params.opts.export.include_metrics = true,
            "--per-team" => params.opts.export.export_type = ExportType::PerTeam,
            "--config" => { value(flag)?; }
            "--list-groups" => params.list_groups = true,
            "-h" | "--help" => {
                eprintln!("{HELP}");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {flag}").into()),
        }
    }

    if let Some(w) = weights_given {
        params.opts.eval.weights = w;
    }
    if let Some(out) = &params.out {
        params.opts.export.set_path(&out.to_string_lossy());
    }
    Ok(params)
}

fn parse_weights(s: &str) -> Result<TierWeights, Box<dyn Error>> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()?;
    match parts.as_slice() {
        [a, b, c] => Ok(TierWeights::new(*a, *b, *c)),
        _ => Err(format!("Expected three weights, got {}", parts.len()).into()),
    }
}

fn print_groups(version: TaxonomyVersion) {
    let tax = version.taxonomy();
    println!("Taxonomy: {}", version.label());
    for g in tax.groups {
        println!("{} [{}]", g.name, g.codes.join(", "));
        for (k, tier) in g.tiers.tiers().iter().enumerate() {
            println!("  Tier {}: {}", k + 1, tier.join(", "));
        }
    }
}

/// Column-aligned table on stdout.
fn print_table(players: &[ScoredPlayer], include_metrics: bool) {
    let (headers, rows) = score_table(players, include_metrics);
    let widths: Vec<usize> = (0..headers.len())
        .map(|c| {
            rows.iter()
                .map(|r| r[c].chars().count())
                .chain(std::iter::once(headers[c].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };
    println!("{}", line(&headers).trim_end());
    for r in &rows {
        println!("{}", line(r).trim_end());
    }
}
