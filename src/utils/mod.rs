pub(crate) mod date;

pub(crate) use date::{days_before, parse_date};

use chrono::Utc;

/// UTC timestamp prefix for log lines: "2025-01-05T00:00:00Z"
pub(crate) fn now_stamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
