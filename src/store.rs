// src/store.rs
//
// Uploaded tables: load from disk, merge several into one.
//
// A merge is all-or-nothing. `load_sources` reads and parses every file
// first and only then builds the merged DataSet, so a bad file leaves the
// caller's previous table untouched.

use std::{error::Error, fs, path::{Path, PathBuf}};

use crate::csv::{decode_bytes, parse_rows, split_header, Delim};
use crate::progress::Progress;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self { Self { headers, rows } }
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell by row and column name; short rows read as empty.
    pub fn cell(&self, row: usize, name: &str) -> Option<&str> {
        let ci = self.column(name)?;
        let r = self.rows.get(row)?;
        Some(r.get(ci).map(|s| s.as_str()).unwrap_or(""))
    }
}

/// Parse table text. Separator is sniffed from the header line.
pub fn parse_table(text: &str) -> DataSet {
    let delim = Delim::sniff(text);
    let (headers, rows) = split_header(parse_rows(text, delim.sep()));
    DataSet { headers, rows }
}

/// Read one CSV/TSV file (UTF-8 or Latin-1).
pub fn load_table(path: &Path) -> Result<DataSet, Box<dyn Error>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if !matches!(ext.as_str(), "csv" | "tsv" | "txt") {
        return Err(format!(
            "Unsupported file type: {} (expected .csv or .tsv)",
            path.display()
        ).into());
    }

    let bytes = fs::read(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let ds = parse_table(&decode_bytes(&bytes));
    if ds.headers.is_empty() {
        return Err(format!("{}: file is empty", path.display()).into());
    }
    logd!("Store: Parsed {} (rows={}, headers={})", path.display(), ds.row_count(), ds.header_count());
    Ok(ds)
}

/// Concatenate tables with column-union semantics.
/// Columns keep first-seen order; cells a table lacks are left empty.
pub fn merge(tables: Vec<DataSet>) -> DataSet {
    let mut headers: Vec<String> = Vec::new();
    for t in &tables {
        for h in &t.headers {
            if !headers.contains(h) { headers.push(h.clone()); }
        }
    }

    let mut rows = Vec::with_capacity(tables.iter().map(|t| t.rows.len()).sum());
    for t in tables {
        let map: Vec<Option<usize>> = headers.iter().map(|h| t.column(h)).collect();
        for r in t.rows {
            rows.push(
                map.iter()
                    .map(|ix| ix.and_then(|i| r.get(i).cloned()).unwrap_or_default())
                    .collect(),
            );
        }
    }
    DataSet { headers, rows }
}

/// The uploaded files and their merged table.
#[derive(Clone, Debug, Default)]
pub struct Sources {
    pub paths: Vec<PathBuf>,
    pub table: DataSet,
}

impl Sources {
    pub fn is_empty(&self) -> bool { self.paths.is_empty() }
}

/// Load every path, then merge. Any failure aborts the whole load.
pub fn load_sources(
    paths: &[PathBuf],
    mut progress: Option<&mut dyn Progress>,
) -> Result<Sources, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(paths.len());
    }

    let mut tables = Vec::with_capacity(paths.len());
    for (i, path) in paths.iter().enumerate() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Loading {}", path.display()));
        }
        match load_table(path) {
            Ok(t) => tables.push(t),
            Err(e) => {
                loge!("Store: Load failed {}: {}", path.display(), e);
                if let Some(p) = progress.as_deref_mut() { p.fail(&e.to_string()); }
                return Err(e);
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i);
        }
    }

    let table = merge(tables);
    logf!("Store: Merged {} file(s) (rows={}, headers={})", paths.len(), table.row_count(), table.header_count());

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(Sources { paths: paths.to_vec(), table })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds(h: &[&str], rows: &[&[&str]]) -> DataSet {
        DataSet {
            headers: h.iter().map(|s| s!(*s)).collect(),
            rows: rows.iter().map(|r| r.iter().map(|s| s!(*s)).collect()).collect(),
        }
    }

    #[test]
    fn merge_takes_column_union() {
        let a = ds(&["Player", "Goals"], &[&["A", "3"]]);
        let b = ds(&["Player", "Assists"], &[&["B", "5"]]);
        let m = merge(vec![a, b]);
        assert_eq!(m.headers, vec!["Player", "Goals", "Assists"]);
        assert_eq!(m.rows, vec![
            vec![s!("A"), s!("3"), s!("")],
            vec![s!("B"), s!(""), s!("5")],
        ]);
    }

    #[test]
    fn short_rows_read_as_empty() {
        let d = ds(&["Player", "Goals"], &[&["A"]]);
        assert_eq!(d.cell(0, "Goals"), Some(""));
        assert_eq!(d.cell(0, "Assists"), None);
    }

    #[test]
    fn parse_table_sniffs_tabs() {
        let d = parse_table("Player\tTeam\nAna\tFC\n");
        assert_eq!(d.headers, vec!["Player", "Team"]);
        assert_eq!(d.rows, vec![vec![s!("Ana"), s!("FC")]]);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_table(Path::new("stats.xlsx")).unwrap_err();
        assert!(err.to_string().contains("Unsupported file type"));
    }
}
