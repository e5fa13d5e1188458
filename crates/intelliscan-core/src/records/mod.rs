//! Typed rows of a decoded INTELLISCAN report.
//!
//! Every report exposes OBJ_TYPE, OBJ_NAME and DATA; any further columns
//! are carried along in source order so they can still be displayed.

mod load;

pub use load::{load_records, normalize_column_name};

/// Where a displayed column's value lives in a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    ObjType,
    ObjName,
    Data,
    /// Index into [`Record::other`].
    Other(usize),
}

/// A named column in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Normalized (trimmed, uppercased) header.
    pub name: String,
    pub column: Column,
}

/// One report row. Columns missing from the source are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub obj_type: String,
    pub obj_name: String,
    pub data: String,
    pub other: Vec<String>,
}

impl Record {
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::ObjType => &self.obj_type,
            Column::ObjName => &self.obj_name,
            Column::Data => &self.data,
            Column::Other(i) => self.other.get(i).map(String::as_str).unwrap_or(""),
        }
    }
}

/// Loaded report: column layout plus rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTable {
    pub columns: Vec<ColumnSpec>,
    pub records: Vec<Record>,
}

impl ReportTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Cell values of `record` in column order.
    pub fn row<'a>(&'a self, record: &'a Record) -> impl Iterator<Item = &'a str> {
        self.columns.iter().map(move |c| record.get(c.column))
    }
}
