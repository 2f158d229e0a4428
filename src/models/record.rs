use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Layout of the timestamp column (`YYYY-MM-DD HH:MM:SS`, local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One "I finished my milk" entry, as stored in a sheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub name: String,      // ⇔ column 1
    pub timestamp: String, // ⇔ column 2 (TIMESTAMP_FORMAT)
}

impl AttendanceRecord {
    /// Build a record for the write path. The name is trimmed and checked
    /// against `max_name_chars`; nothing reaches the store otherwise.
    pub fn new(name: &str, at: NaiveDateTime, max_name_chars: usize) -> AppResult<Self> {
        Ok(Self {
            name: normalize_name(name, max_name_chars)?,
            timestamp: format_timestamp(&at),
        })
    }

    /// Map a raw sheet row onto a record.
    ///
    /// Never fails: cells are trimmed, missing cells become empty and extra
    /// columns are ignored, so every data row keeps its position.
    pub fn from_row(row: &[String]) -> Self {
        let cell = |i: usize| row.get(i).map(|c| c.trim().to_string()).unwrap_or_default();
        Self {
            name: cell(0),
            timestamp: cell(1),
        }
    }

    /// Cells in column order, ready for `append_row`.
    pub fn to_row(&self) -> Vec<String> {
        vec![self.name.clone(), self.timestamp.clone()]
    }

    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }

    pub fn day(&self) -> Option<NaiveDate> {
        self.parsed_timestamp().map(|dt| dt.date())
    }
}

/// Trim and validate a name typed by a student.
pub fn normalize_name(raw: &str, max_chars: usize) -> AppResult<String> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(AppError::ValidationFailed("please enter a name".into()));
    }

    let len = name.chars().count();
    if len > max_chars {
        return Err(AppError::ValidationFailed(format!(
            "name '{name}' is {len} characters long (max {max_chars})"
        )));
    }

    Ok(name.to_string())
}

pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).map_err(|_| {
        AppError::ValidationFailed(format!(
            "invalid timestamp '{s}' (expected YYYY-MM-DD HH:MM:SS)"
        ))
    })
}
