//! Unified application error type.
//! All modules (sheet, core, db, cli, export) return AppError to keep the
//! error handling consistent and easy to surface to the user.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Workbook internals (migrations, audit log)
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Attendance store
    // ---------------------------
    #[error("Attendance store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Write rejected by the attendance store: {0}")]
    WriteRejected(String),

    #[error("Position out of range: index {index} (the list has {len} entries)")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Invalid input: {0}")]
    ValidationFailed(String),

    #[error("This action requires the admin password")]
    AdminRequired,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration missing: run `milklog init` or pass --workbook")]
    ConfigurationMissing,

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
