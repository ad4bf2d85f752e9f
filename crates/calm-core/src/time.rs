//! Journal timestamps. Entries store RFC 3339 UTC text with whole seconds,
//! so lexical order in the database is chronological order.

use chrono::{DateTime, SecondsFormat, Utc};

/// Timestamp for a new entry, e.g. `2026-02-21T14:03:05Z`.
pub fn entry_timestamp() -> String {
    stamp(Utc::now())
}

fn stamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render a stored timestamp for listing, e.g. `2026-02-21 at 14:03:05 UTC`.
/// Text that doesn't parse is shown unchanged.
pub fn display_timestamp(stored: &str) -> String {
    match DateTime::parse_from_rfc3339(stored) {
        Ok(at) => at
            .with_timezone(&Utc)
            .format("%Y-%m-%d at %H:%M:%S UTC")
            .to_string(),
        Err(_) => stored.to_string(),
    }
}
