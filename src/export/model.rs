// src/export/model.rs

use crate::models::AttendanceLog;
use serde::Serialize;

/// Flat row used by every export format.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    pub position: usize,
    pub name: String,
    pub timestamp: String,
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["position", "name", "timestamp"]
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![r.position.to_string(), r.name.clone(), r.timestamp.clone()]
}

/// Number the log with 1-based display positions.
pub(crate) fn from_log(log: &AttendanceLog) -> Vec<RecordExport> {
    log.iter()
        .enumerate()
        .map(|(i, r)| RecordExport {
            position: i + 1,
            name: r.name.clone(),
            timestamp: r.timestamp.clone(),
        })
        .collect()
}
