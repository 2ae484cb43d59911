use crate::alerts::Change;
use crate::parser::format_value;
use crate::utils::TimestampFormatter;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A change the monitor reported.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    pub timestamp: DateTime<Utc>,
    pub old: f64,
    pub new: f64,
}

#[derive(Serialize)]
struct JsonChange<'a> {
    timestamp: &'a str,
    old: f64,
    new: f64,
}

impl ChangeEvent {
    pub fn new(change: Change, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            old: change.old,
            new: change.new,
        }
    }

    /// `[YYYY-MM-DD HH:MM:SS] Value changed: <old> -> <new>`
    pub fn to_text_line(&self, formatter: &TimestampFormatter) -> String {
        format!(
            "[{}] Value changed: {} -> {}",
            formatter.format(&self.timestamp),
            format_value(self.old),
            format_value(self.new)
        )
    }

    pub fn to_json_line(&self, formatter: &TimestampFormatter) -> Result<String> {
        let timestamp = formatter.format_rfc3339(&self.timestamp);
        Ok(serde_json::to_string(&JsonChange {
            timestamp: &timestamp,
            old: self.old,
            new: self.new,
        })?)
    }
}
