//! Lenient timestamp parsing for feed payloads.
//!
//! Both upstream feeds emit ISO-8601 instants, but the audit exporter
//! has been observed to drop the offset suffix. Anything that still
//! fails to parse is treated as the Unix epoch so that a malformed row
//! sorts to the end of a time-descending view instead of crashing the
//! merge.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse an ISO-8601 instant, tolerating a missing UTC offset.
///
/// Returns `None` for anything unparseable; callers decide whether
/// that means "drop the row" or "fall back to the epoch."
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    // Offset-less variant, e.g. "2026-03-01T09:30:00.123".
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Parse an instant, substituting the Unix epoch when unparseable.
pub fn parse_instant_or_epoch(raw: &str) -> DateTime<Utc> {
    parse_instant(raw).unwrap_or(DateTime::UNIX_EPOCH)
}
