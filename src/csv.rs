// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

use crate::core::sanitize::normalize_ws;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delim {
    Csv,
    Tsv,
    Semicolon,
}

impl Delim {
    pub fn sep(&self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
            Delim::Semicolon => ';',
        }
    }

    /// Guess from the header line: whichever separator occurs most wins,
    /// commas on a tie.
    pub fn sniff(text: &str) -> Delim {
        let first = text.lines().next().unwrap_or("");
        let count = |c: char| first.matches(c).count();
        let (tabs, semis, commas) = (count('\t'), count(';'), count(','));
        if tabs > commas && tabs >= semis { Delim::Tsv }
        else if semis > commas { Delim::Semicolon }
        else { Delim::Csv }
    }
}

/* ---------------- Decoding ---------------- */

/// Sheets exported on Windows often come as Latin-1. Take UTF-8 when the
/// bytes are valid (dropping a BOM), otherwise map each byte to its
/// Latin-1 code point, which never fails.
pub fn decode_bytes(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(s) => s!(s),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant). std-only.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush any trailing field/row even if quotes were unterminated.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// First row is the header; header cells get their whitespace normalized.
pub fn split_header(mut rows: Vec<Vec<String>>) -> (Vec<String>, Vec<Vec<String>>) {
    if rows.is_empty() { return (Vec::new(), rows); }
    let header = rows.remove(0).iter().map(|h| normalize_ws(h)).collect();
    (header, rows)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Create a full export string (Copy/Export).
/// - `headers`: emitted first when `include_headers`
/// - `sep`: character to be used as field/cell separator
pub fn to_export_string(
    headers: &[String],
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers && !headers.is_empty() {
        let _ = write_row(&mut buf, headers, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
