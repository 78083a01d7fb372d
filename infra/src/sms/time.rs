//! Wall-clock helpers for provider payloads

use chrono::{FixedOffset, SecondsFormat, Utc};

/// Iran Standard Time, UTC+03:30 all year round
const TEHRAN_OFFSET_SECS: i32 = 3 * 3600 + 30 * 60;

/// Current time in Tehran as ISO-8601 with offset, e.g. `2025-03-01T10:15:00+03:30`
pub fn tehran_now_iso8601() -> String {
    let now = Utc::now();
    match FixedOffset::east_opt(TEHRAN_OFFSET_SECS) {
        Some(tehran) => now
            .with_timezone(&tehran)
            .to_rfc3339_opts(SecondsFormat::Secs, false),
        None => now.to_rfc3339_opts(SecondsFormat::Secs, false),
    }
}

/// Current UTC time with microseconds, e.g. `2025-03-01T06:45:00.000000Z`
pub fn utc_now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current Unix timestamp in seconds
pub fn unix_now() -> i64 {
    Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tehran_offset_suffix() {
        assert!(tehran_now_iso8601().ends_with("+03:30"));
    }

    #[test]
    fn test_utc_suffix() {
        let now = utc_now_iso8601();
        assert!(now.ends_with('Z'));
        assert_eq!(now.len(), "2025-03-01T06:45:00.000000Z".len());
    }
}
