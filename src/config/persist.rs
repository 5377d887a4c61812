// src/config/persist.rs
//
// Settings file: plain `key=value` lines, `#` comments. Unknown keys and
// malformed values are ignored so an old file never blocks startup.

use std::{fs, io, path::Path};

use super::options::{AppOptions, ExportFormat};
use crate::engine::{NormalizationPolicy, TaxonomyVersion};

fn parse_bool(val: &str) -> Option<bool> {
    match val {
        "1" => Some(true),
        "0" => Some(false),
        v if v.eq_ignore_ascii_case("true") => Some(true),
        v if v.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// Apply settings text on top of `opts`.
pub fn apply(text: &str, opts: &mut AppOptions) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else { continue };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();

        let eval = &mut opts.eval;
        match key {
            "group" => eval.group = s!(val),
            "min_minutes" => if let Ok(v) = val.parse() { eval.min_minutes = v },
            "max_minutes" => if let Ok(v) = val.parse() { eval.max_minutes = v },
            "max_age" => if let Ok(v) = val.parse() { eval.max_age = v },
            "weight1" => if let Ok(v) = val.parse() { eval.weights.tier1 = v },
            "weight2" => if let Ok(v) = val.parse() { eval.weights.tier2 = v },
            "weight3" => if let Ok(v) = val.parse() { eval.weights.tier3 = v },
            "taxonomy" => if let Some(v) = TaxonomyVersion::parse(val) { eval.taxonomy = v },
            "policy" => if let Some(v) = NormalizationPolicy::parse(val) { eval.policy = v },
            "format" => match val.to_ascii_lowercase().as_str() {
                "csv" => opts.export.format = ExportFormat::Csv,
                "tsv" => opts.export.format = ExportFormat::Tsv,
                _ => {}
            },
            "include_headers" => if let Some(b) = parse_bool(val) { opts.export.include_headers = b },
            "include_metrics" => if let Some(b) = parse_bool(val) { opts.export.include_metrics = b },
            "out_path" => opts.export.set_path(val),
            _ => logd!("Config: Ignoring unknown key {}", key),
        }
    }

    // Keep the group valid for the chosen taxonomy.
    let version = opts.eval.taxonomy;
    opts.eval.set_taxonomy(version);
}

/// Load settings; a missing or unreadable file yields defaults.
pub fn load(path: &Path) -> AppOptions {
    let mut opts = AppOptions::default();
    match fs::read_to_string(path) {
        Ok(text) => {
            apply(&text, &mut opts);
            logf!("Config: Loaded {}", path.display());
        }
        Err(e) => logd!("Config: No settings at {} ({})", path.display(), e),
    }
    opts
}

pub fn to_text(opts: &AppOptions) -> String {
    let e = &opts.eval;
    let x = &opts.export;
    let mut s = s!();
    s.push_str(&format!("group={}\n", e.group));
    s.push_str(&format!("min_minutes={}\n", e.min_minutes));
    s.push_str(&format!("max_minutes={}\n", e.max_minutes));
    s.push_str(&format!("max_age={}\n", e.max_age));
    s.push_str(&format!("weight1={}\n", e.weights.tier1));
    s.push_str(&format!("weight2={}\n", e.weights.tier2));
    s.push_str(&format!("weight3={}\n", e.weights.tier3));
    s.push_str(&format!("taxonomy={}\n", e.taxonomy.label()));
    s.push_str(&format!("policy={}\n", e.policy.label()));
    s.push_str(&format!("format={}\n", x.format.ext()));
    s.push_str(&format!("include_headers={}\n", if x.include_headers {1} else {0}));
    s.push_str(&format!("include_metrics={}\n", if x.include_metrics {1} else {0}));
    s.push_str(&format!("out_path={}\n", x.out_path().display()));
    s
}

pub fn save(path: &Path, opts: &AppOptions) -> io::Result<()> {
    fs::write(path, to_text(opts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_text() {
        let mut a = AppOptions::default();
        a.eval.group = s!("Wingers");
        a.eval.max_age = 23;
        a.eval.weights.tier1 = 0.5;
        a.export.format = ExportFormat::Tsv;
        let mut b = AppOptions::default();
        apply(&to_text(&a), &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn junk_is_ignored() {
        let mut o = AppOptions::default();
        apply("# comment\nmax_age=abc\nnonsense\ncolour=blue\nmin_minutes=450\n", &mut o);
        assert_eq!(o.eval.max_age, AppOptions::default().eval.max_age);
        assert_eq!(o.eval.min_minutes, 450);
    }

    #[test]
    fn legacy_taxonomy_fixes_group() {
        let mut o = AppOptions::default();
        apply("group=Left Backs\ntaxonomy=legacy\n", &mut o);
        assert_eq!(o.eval.group, "Goalkeepers");
    }
}
