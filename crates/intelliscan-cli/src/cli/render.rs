//! Rendering of matched rows: aligned text table, CSV or JSON.

use std::collections::HashSet;

use anyhow::Result;
use clap::ValueEnum;
use intelliscan_core::records::ReportTable;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for the terminal.
    Table,
    /// RFC 4180 CSV with a header row.
    Csv,
    /// JSON array of objects keyed by column name.
    Json,
}

pub fn render(table: &ReportTable, format: OutputFormat, max_cell_width: usize) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(table, max_cell_width)),
        OutputFormat::Csv => render_csv(table),
        OutputFormat::Json => render_json(table),
    }
}

/// One-line cell: control whitespace flattened, cut at `max` chars (0 = no cut).
fn cell(value: &str, max: usize) -> String {
    let flat: String = value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if max == 0 || flat.chars().count() <= max {
        return flat;
    }
    let mut cut: String = flat.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

pub fn render_table(table: &ReportTable, max_cell_width: usize) -> String {
    let headers: Vec<String> = table.headers().map(str::to_string).collect();
    let rows: Vec<Vec<String>> = table
        .records
        .iter()
        .map(|r| table.row(r).map(|v| cell(v, max_cell_width)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, v) in widths.iter_mut().zip(row) {
            *w = (*w).max(v.chars().count());
        }
    }

    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = line(&headers[..]);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&line(&rule[..]));
    for row in &rows {
        out.push_str(&line(&row[..]));
    }
    out
}

pub fn render_csv(table: &ReportTable) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(table.headers())?;
    for record in &table.records {
        wtr.write_record(table.row(record))?;
    }
    let bytes = wtr.into_inner().map_err(|e| anyhow::anyhow!("csv: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

/// JSON object keys, one per column. A repeated header gets `_2`, `_3`, ...
fn json_keys(table: &ReportTable) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    table
        .headers()
        .map(|name| {
            let mut key = name.to_string();
            let mut n = 2;
            while used.contains(&key) {
                key = format!("{}_{}", name, n);
                n += 1;
            }
            used.insert(key.clone());
            key
        })
        .collect()
}

pub fn render_json(table: &ReportTable) -> Result<String> {
    let keys = json_keys(table);
    let rows: Vec<Value> = table
        .records
        .iter()
        .map(|record| {
            let obj: Map<String, Value> = keys
                .iter()
                .zip(table.row(record))
                .map(|(key, value)| (key.clone(), Value::String(value.to_string())))
                .collect();
            Value::Object(obj)
        })
        .collect();
    let mut out = serde_json::to_string_pretty(&rows)?;
    out.push('\n');
    Ok(out)
}
