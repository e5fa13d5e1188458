//! One user action: validate inputs, fetch the report, load rows, filter.

use crate::fetch::{self, FetchError};
use crate::filter;
use crate::records::{self, ReportTable};
use crate::report::ReportRequest;

/// Result of a successful search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Rows in the report before filtering.
    pub total_rows: usize,
    /// Matching rows, with the report's column layout.
    pub table: ReportTable,
}

impl SearchOutcome {
    pub fn matched(&self) -> usize {
        self.table.len()
    }
}

/// Rejects blank URL, username or password before any network call.
pub fn validate(request: &ReportRequest) -> Result<(), FetchError> {
    for (field, value) in [
        ("environment URL", &request.base_url),
        ("username", &request.username),
        ("password", &request.password),
    ] {
        if value.trim().is_empty() {
            return Err(FetchError::MissingInput(field));
        }
    }
    Ok(())
}

/// Loads `csv_text` and keeps the rows matching `term`.
pub fn search_text(csv_text: &str, term: &str) -> Result<SearchOutcome, FetchError> {
    let table = records::load_records(csv_text).map_err(FetchError::Decode)?;
    let total_rows = table.len();
    let ReportTable { columns, records } = table;
    let matched = filter::filter(records, term);
    tracing::info!(total_rows, matched = matched.len(), term, "filtered report");
    Ok(SearchOutcome {
        total_rows,
        table: ReportTable {
            columns,
            records: matched,
        },
    })
}

/// Full fetch + decode + filter cycle for one report.
pub fn run_search(request: &ReportRequest, term: &str) -> Result<SearchOutcome, FetchError> {
    validate(request)?;
    let csv_text = fetch::fetch_report(request)?;
    search_text(&csv_text, term)
}
