// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{RecordExport, from_log};
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::models::AttendanceLog;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the attendance log.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `range`: `None`, `"all"` or a period such as `YYYY-MM` or
    ///   `YYYY-MM-DD:YYYY-MM-DD`; rows without a readable timestamp are left
    ///   out when a range is given
    ///
    /// Returns the number of exported rows; nothing is written when the
    /// selection is empty.
    pub fn export(
        log: &AttendanceLog,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        sheet: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path: PathBuf = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let records = select(log, bounds);

        if records.is_empty() {
            warning("No records found for the selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&records, &path)?,
            ExportFormat::Json => export_json(&records, &path)?,
            ExportFormat::Xlsx => export_xlsx(&records, &path, sheet)?,
        }

        Ok(records.len())
    }
}

/// Rows inside `bounds`, keeping their display positions from the full log.
fn select(log: &AttendanceLog, bounds: Option<(NaiveDate, NaiveDate)>) -> Vec<RecordExport> {
    let all = from_log(log);

    match bounds {
        None => all,
        Some((start, end)) => all
            .into_iter()
            .zip(log.iter())
            .filter(|(_, rec)| rec.day().is_some_and(|d| d >= start && d <= end))
            .map(|(exp, _)| exp)
            .collect(),
    }
}
