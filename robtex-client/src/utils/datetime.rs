//! Unix timestamp conversion helpers.
//!
//! Robtex reports every observation time as Unix seconds.

use chrono::{DateTime, Utc};

/// Convert Unix seconds to `DateTime<Utc>`.
///
/// Returns `None` for a zero timestamp (field absent in the response) or a value
/// outside chrono's representable range.
pub fn from_unix_seconds(ts: i64) -> Option<DateTime<Utc>> {
    if ts == 0 {
        return None;
    }
    DateTime::from_timestamp(ts, 0)
}
