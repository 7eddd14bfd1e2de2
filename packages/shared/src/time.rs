use chrono::{DateTime, FixedOffset, Utc};

/// JST offset in seconds (UTC+9)
const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Get current Unix timestamp in JST (milliseconds)
pub fn get_jst_timestamp() -> i64 {
    now_jst().timestamp_millis()
}

/// Convert a Unix timestamp in milliseconds to an RFC 3339 string in JST
pub fn timestamp_to_jst_rfc3339(timestamp_ms: i64) -> String {
    let jst = jst_offset();
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.with_timezone(&jst).to_rfc3339())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

fn now_jst() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&jst_offset())
}

fn jst_offset() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).unwrap() // always within ±24h
}
