/// Every record table is keyed by a positive, process-unique integer.
pub type RecordId = i64;

/// Largest id handed out: the largest integer a JavaScript client reads back
/// exactly (`Number.MAX_SAFE_INTEGER`).
pub const MAX_RECORD_ID: RecordId = (1 << 53) - 1;

/// Coerce an identifier from its external string form (a path segment).
///
/// Only plain decimal integers are accepted. Anything else yields `None`,
/// which callers treat exactly like an unmatched id.
pub fn parse_id(raw: &str) -> Option<RecordId> {
    raw.trim().parse::<RecordId>().ok()
}
