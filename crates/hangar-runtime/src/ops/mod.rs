pub mod recents;
pub mod sync;

use chrono::{SecondsFormat, Utc};

/// Timestamp used for record stamps and pass epochs.
///
/// Fixed-width RFC 3339 (microseconds, `Z` suffix) so that SQLite's
/// lexicographic text ordering is chronological and epoch comparison is
/// exact string equality.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
