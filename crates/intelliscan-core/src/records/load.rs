//! CSV text to [`ReportTable`].

use crate::fetch::DecodeError;

use super::{Column, ColumnSpec, Record, ReportTable};

const OBJ_TYPE: &str = "OBJ_TYPE";
const OBJ_NAME: &str = "OBJ_NAME";
const DATA: &str = "DATA";

/// Header normalization used for every column comparison.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Parses the report CSV. The first row is the header.
///
/// Required columns absent from the header are appended as empty columns.
/// Short rows are padded with empty cells.
pub fn load_records(csv_text: &str) -> Result<ReportTable, DecodeError> {
    let text = csv_text.strip_prefix('\u{feff}').unwrap_or(csv_text);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(normalize_column_name).collect();

    let mut columns = Vec::with_capacity(headers.len() + 3);
    let mut other_count = 0usize;
    for name in headers {
        let taken = |c: Column| columns.iter().any(|s: &ColumnSpec| s.column == c);
        let column = match name.as_str() {
            OBJ_TYPE if !taken(Column::ObjType) => Column::ObjType,
            OBJ_NAME if !taken(Column::ObjName) => Column::ObjName,
            DATA if !taken(Column::Data) => Column::Data,
            _ => {
                other_count += 1;
                Column::Other(other_count - 1)
            }
        };
        columns.push(ColumnSpec { name, column });
    }
    let source_width = columns.len();

    for (name, column) in [
        (OBJ_TYPE, Column::ObjType),
        (OBJ_NAME, Column::ObjName),
        (DATA, Column::Data),
    ] {
        if !columns.iter().any(|s| s.column == column) {
            tracing::debug!("report has no {} column; using empty values", name);
            columns.push(ColumnSpec {
                name: name.to_string(),
                column,
            });
        }
    }

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let mut record = Record {
            other: Vec::with_capacity(other_count),
            ..Default::default()
        };
        for (i, spec) in columns.iter().take(source_width).enumerate() {
            let value = row.get(i).unwrap_or("").to_string();
            match spec.column {
                Column::ObjType => record.obj_type = value,
                Column::ObjName => record.obj_name = value,
                Column::Data => record.data = value,
                Column::Other(_) => record.other.push(value),
            }
        }
        records.push(record);
    }

    tracing::debug!(
        rows = records.len(),
        columns = columns.len(),
        "loaded report rows"
    );
    Ok(ReportTable { columns, records })
}
