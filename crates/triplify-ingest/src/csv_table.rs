//! CSV loading into an in-memory table.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// A CSV file held fully in memory: one header row plus data rows.
///
/// Every data row has exactly `headers.len()` cells; short records are
/// padded with empty strings and long ones truncated during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn clean_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut cleaned = String::new();
    if let Some(first) = parts.next() {
        cleaned.push_str(first);
        for part in parts {
            cleaned.push(' ');
            cleaned.push_str(part);
        }
    }
    cleaned
}

fn clean_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file. The first non-empty record is the header row.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    parse_table(reader).with_context(|| format!("read csv: {}", path.display()))
}

/// Read CSV text already in memory, e.g. from a test fixture or upload.
pub fn read_csv_str(data: &str) -> Result<CsvTable> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data.as_bytes());
    parse_table(reader).context("read csv text")
}

fn parse_table<R: Read>(mut reader: csv::Reader<R>) -> Result<CsvTable> {
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.context("read record")?;
        let row: Vec<String> = record.iter().map(clean_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        raw_rows.push(row);
    }

    let Some(header_row) = raw_rows.first() else {
        return Ok(CsvTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    };
    let headers: Vec<String> = header_row.iter().map(|cell| clean_header(cell)).collect();

    let mut rows = Vec::with_capacity(raw_rows.len().saturating_sub(1));
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(record.get(idx).cloned().unwrap_or_default());
        }
        rows.push(row);
    }

    tracing::debug!(
        columns = headers.len(),
        rows = rows.len(),
        "Loaded CSV table"
    );
    Ok(CsvTable { headers, rows })
}
