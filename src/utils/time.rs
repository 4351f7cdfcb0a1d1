use chrono::{SecondsFormat, Utc};

/// Timestamp in the same shape JavaScript's `toISOString()` produces,
/// e.g. `2026-10-19T12:00:00.000Z`. Lexical order matches time order.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
