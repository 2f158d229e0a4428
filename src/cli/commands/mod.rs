pub mod add;
pub mod backup;
pub mod clear;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod kiosk;
pub mod list;
pub mod log;
pub mod stats;

use crate::config::Config;
use crate::core::{AttendanceStore, StoreOptions};
use crate::errors::AppResult;
use crate::sheet::SqliteSheet;

/// Open the configured sheet behind a fresh facade.
pub(crate) fn open_store(cfg: &Config) -> AppResult<AttendanceStore<SqliteSheet>> {
    let sheet = SqliteSheet::open(&cfg.workbook, &cfg.sheet, &cfg.header)?;
    Ok(AttendanceStore::new(sheet, StoreOptions::from(cfg)))
}
