// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::engine::{NormalizationPolicy, TaxonomyVersion, Thresholds, TierWeights};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub eval: EvalOptions,
    pub export: ExportOptions,
}

/// Everything one scoring pass needs besides the table itself.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalOptions {
    pub group: String,
    pub min_minutes: u32,
    pub max_minutes: u32,
    pub max_age: u32,
    pub weights: TierWeights,
    pub taxonomy: TaxonomyVersion,
    pub policy: NormalizationPolicy,
}

impl Default for EvalOptions {
    fn default() -> Self {
        let (w1, w2, w3) = DEFAULT_WEIGHTS;
        Self {
            group: s!(DEFAULT_GROUP),
            min_minutes: DEFAULT_MIN_MINUTES,
            max_minutes: DEFAULT_MAX_MINUTES,
            max_age: DEFAULT_MAX_AGE,
            weights: TierWeights::new(w1, w2, w3),
            taxonomy: TaxonomyVersion::Current,
            policy: NormalizationPolicy::MinMax,
        }
    }
}

impl EvalOptions {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            min_minutes: self.min_minutes,
            max_minutes: self.max_minutes,
            max_age: self.max_age,
        }
    }

    /// Switching taxonomy may orphan the selected group; fall back to the first.
    pub fn set_taxonomy(&mut self, version: TaxonomyVersion) {
        self.taxonomy = version;
        let tax = version.taxonomy();
        if tax.group(&self.group).is_err() {
            self.group = tax.group_names().first().map(|g| s!(*g)).unwrap_or_default();
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportType {
    SingleFile,
    PerTeam,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    out_path: OutputPath,
    pub include_headers: bool,
    /// Append one normalized column per metric.
    pub include_metrics: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            out_path: OutputPath::default(),
            include_headers: true,
            include_metrics: false,
        }
    }
}

impl ExportOptions {
    /// File path for SingleFile, directory for PerTeam.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        match self.export_type {
            ExportType::SingleFile => {
                let stem = self.out_path.file_stem.to_string_lossy().into_owned();
                let ext = self
                    .out_path
                    .ext
                    .as_deref()
                    .unwrap_or_else(|| self.format.ext());
                path.push(join!(stem, ".", ext));
            }
            ExportType::PerTeam => { /* directory only */ }
        }
        path
    }

    /// Parse user text into dir + stem. An explicit extension typed by the
    /// user wins over the format's default.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                if let Some(parent) = p.parent() {
                    self.out_path.dir = parent.to_path_buf();
                }
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_os_string();
                }
                self.out_path.ext = p
                    .extension()
                    .map(|e| e.to_string_lossy().into_owned())
                    .filter(|e| !e.eq_ignore_ascii_case(self.format.ext()));
            }
            ExportType::PerTeam => {
                self.out_path.dir = PathBuf::from(s);
            }
        }
    }

    pub fn delimiter(&self) -> char { self.format.delim() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<String>, // user override
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_SCORES_SUBDIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_follows_format() {
        let mut e = ExportOptions::default();
        assert!(e.out_path().to_string_lossy().ends_with("ranking.csv"));
        e.format = ExportFormat::Tsv;
        assert!(e.out_path().to_string_lossy().ends_with("ranking.tsv"));
    }

    #[test]
    fn typed_extension_sticks() {
        let mut e = ExportOptions::default();
        e.set_path("out/mine/top.txt");
        e.format = ExportFormat::Tsv;
        assert_eq!(e.out_path(), PathBuf::from("out/mine/top.txt"));
    }

    #[test]
    fn taxonomy_switch_resets_orphaned_group() {
        let mut o = EvalOptions { group: s!("Right Backs"), ..EvalOptions::default() };
        o.set_taxonomy(TaxonomyVersion::Legacy);
        assert_eq!(o.group, "Goalkeepers");
        o.group = s!("Forwards");
        o.set_taxonomy(TaxonomyVersion::Current);
        assert_eq!(o.group, "Forwards");
    }
}
