use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

/// Layout used in change lines, e.g. `2024-05-01 13:37:00`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders instants in either the local zone or an explicit IANA zone.
#[derive(Debug, Clone, Copy)]
pub struct TimestampFormatter {
    timezone: Option<Tz>,
}

impl TimestampFormatter {
    pub fn new(timezone: Option<Tz>) -> Self {
        Self { timezone }
    }

    pub fn format(&self, instant: &DateTime<Utc>) -> String {
        match self.timezone {
            Some(tz) => instant.with_timezone(&tz).format(TIMESTAMP_FORMAT).to_string(),
            None => instant
                .with_timezone(&Local)
                .format(TIMESTAMP_FORMAT)
                .to_string(),
        }
    }

    /// RFC 3339 form for machine-readable output, in the same zone as `format`.
    pub fn format_rfc3339(&self, instant: &DateTime<Utc>) -> String {
        match self.timezone {
            Some(tz) => instant.with_timezone(&tz).to_rfc3339(),
            None => instant.with_timezone(&Local).to_rfc3339(),
        }
    }
}
