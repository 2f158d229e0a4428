//! Attendance store facade.
//!
//! Turns the four user actions (load, append, delete, clear) into calls on a
//! [`SheetBackend`], translating 0-based logical positions into the sheet's
//! 1-based row numbers and keeping a TTL snapshot of the log.

use crate::config::Config;
use crate::core::cache::{CacheState, SnapshotCache};
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceLog, AttendanceRecord};
use crate::sheet::SheetBackend;
use crate::utils::clock::{Clock, SystemClock};
use chrono::NaiveDateTime;
use std::time::Duration;

/// Sheet row holding the column titles.
pub const HEADER_ROW: usize = 1;

/// Result of `clear_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared(usize),
    AlreadyEmpty,
}

#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    pub cache_ttl: Duration,
    pub max_name_chars: usize,
}

impl From<&Config> for StoreOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            cache_ttl: Duration::from_secs(cfg.cache_ttl_secs),
            max_name_chars: cfg.max_name_chars,
        }
    }
}

pub struct AttendanceStore<B: SheetBackend, C: Clock = SystemClock> {
    backend: B,
    clock: C,
    cache: SnapshotCache,
    last_loaded: Option<AttendanceLog>,
    max_name_chars: usize,
}

impl<B: SheetBackend> AttendanceStore<B, SystemClock> {
    pub fn new(backend: B, options: StoreOptions) -> Self {
        Self::with_clock(backend, options, SystemClock)
    }
}

impl<B: SheetBackend, C: Clock> AttendanceStore<B, C> {
    pub fn with_clock(backend: B, options: StoreOptions, clock: C) -> Self {
        Self {
            backend,
            clock,
            cache: SnapshotCache::new(options.cache_ttl),
            last_loaded: None,
            max_name_chars: options.max_name_chars,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn cache_state(&self) -> CacheState {
        self.cache.state(self.clock.now())
    }

    /// Current log, served from the cache while it is fresh.
    pub fn load(&mut self) -> AppResult<AttendanceLog> {
        if let Some(log) = self.cache.get(self.clock.now()) {
            let log = log.clone();
            self.last_loaded = Some(log.clone());
            return Ok(log);
        }
        self.load_fresh()
    }

    /// Current log straight from the sheet; refreshes the cache.
    pub fn load_fresh(&mut self) -> AppResult<AttendanceLog> {
        let rows = self.backend.read_all_rows()?;
        let log = AttendanceLog::from_sheet_rows(&rows);

        self.cache.put(self.clock.now(), log.clone());
        self.last_loaded = Some(log.clone());
        Ok(log)
    }

    /// Append one record. The name is validated before the sheet is touched.
    pub fn append(&mut self, name: &str, at: NaiveDateTime) -> AppResult<AttendanceRecord> {
        let record = AttendanceRecord::new(name, at, self.max_name_chars)?;

        self.backend.append_row(&record.to_row())?;
        self.invalidate();
        Ok(record)
    }

    /// Append one record stamped with the clock's local time.
    pub fn append_now(&mut self, name: &str) -> AppResult<AttendanceRecord> {
        let at = self.clock.local_now();
        self.append(name, at)
    }

    /// Remove the record at `index` of the last loaded log.
    ///
    /// Loads first if nothing has been loaded. The snapshot is discarded on
    /// success, so a following delete works on fresh positions.
    pub fn delete(&mut self, index: usize) -> AppResult<AttendanceRecord> {
        let snapshot = match self.last_loaded.clone() {
            Some(log) => log,
            None => self.load()?,
        };

        let removed = snapshot
            .get(index)
            .cloned()
            .ok_or(AppError::IndexOutOfRange {
                index: index as i64,
                len: snapshot.len(),
            })?;

        self.backend.delete_row(index + HEADER_ROW + 1)?;
        self.invalidate();
        Ok(removed)
    }

    /// Remove by 1-based display position, as shown in listings.
    pub fn delete_display(&mut self, position: i64) -> AppResult<AttendanceRecord> {
        let index = position.saturating_sub(1);
        match usize::try_from(index) {
            Ok(i) => self.delete(i),
            Err(_) => {
                let len = match self.last_loaded.as_ref().map(AttendanceLog::len) {
                    Some(len) => len,
                    None => self.load()?.len(),
                };
                Err(AppError::IndexOutOfRange { index, len })
            }
        }
    }

    /// Remove every data row, keeping the header.
    pub fn clear_all(&mut self) -> AppResult<ClearOutcome> {
        let log = self.load_fresh()?;
        if log.is_empty() {
            return Ok(ClearOutcome::AlreadyEmpty);
        }

        let first = HEADER_ROW + 1;
        self.backend.delete_rows(first, first + log.len() - 1)?;
        self.invalidate();
        Ok(ClearOutcome::Cleared(log.len()))
    }

    /// Force the next `load` to read the sheet.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
        self.last_loaded = None;
    }
}
