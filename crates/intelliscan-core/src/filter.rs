//! RecordFilter: case-insensitive substring match on OBJ_NAME or DATA.

use crate::records::Record;

/// True if the uppercased OBJ_NAME or DATA contains `needle_upper`.
pub fn matches(record: &Record, needle_upper: &str) -> bool {
    record.obj_name.to_uppercase().contains(needle_upper)
        || record.data.to_uppercase().contains(needle_upper)
}

/// Keeps rows whose OBJ_NAME or DATA contains `term`, ignoring case.
///
/// An empty term keeps every row. Plain substring containment, original
/// order, no dedup and no limit.
pub fn filter(rows: Vec<Record>, term: &str) -> Vec<Record> {
    if term.is_empty() {
        return rows;
    }
    let needle = term.to_uppercase();
    rows.into_iter().filter(|r| matches(r, &needle)).collect()
}
