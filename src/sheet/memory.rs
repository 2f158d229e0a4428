use super::SheetBackend;
use crate::errors::{AppError, AppResult};

/// In-process sheet. Used by tests and dry runs; it can be told to fail
/// reads or writes, and counts how often it was read.
#[derive(Debug, Clone)]
pub struct MemorySheet {
    rows: Vec<Vec<String>>,
    fetches: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemorySheet {
    pub fn new(header: &[String]) -> Self {
        Self {
            rows: vec![header.to_vec()],
            fetches: 0,
            fail_reads: false,
            fail_writes: false,
        }
    }

    /// Sheet with a header and the given data rows already in place.
    pub fn with_rows(header: &[String], data: Vec<Vec<String>>) -> Self {
        let mut sheet = Self::new(header);
        sheet.rows.extend(data);
        sheet
    }

    /// Raw rows, header included.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of `read_all_rows` calls that reached the sheet.
    pub fn fetch_count(&self) -> usize {
        self.fetches
    }

    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Append a row behind the facade's back, as another client would.
    pub fn push_external(&mut self, cells: &[&str]) {
        self.rows.push(cells.iter().map(|c| c.to_string()).collect());
    }

    fn check_writable(&self) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::WriteRejected("memory sheet is read-only".into()));
        }
        Ok(())
    }
}

impl SheetBackend for MemorySheet {
    fn read_all_rows(&mut self) -> AppResult<Vec<Vec<String>>> {
        if self.fail_reads {
            return Err(AppError::StoreUnavailable("memory sheet is offline".into()));
        }
        self.fetches += 1;
        Ok(self.rows.clone())
    }

    fn append_row(&mut self, cells: &[String]) -> AppResult<()> {
        self.check_writable()?;
        self.rows.push(cells.to_vec());
        Ok(())
    }

    fn delete_rows(&mut self, start: usize, end: usize) -> AppResult<()> {
        self.check_writable()?;

        if start < 2 || end < start {
            return Err(AppError::WriteRejected(format!(
                "invalid row range {start}..={end}"
            )));
        }
        if end > self.rows.len() {
            return Err(AppError::WriteRejected(format!(
                "row {end} does not exist (sheet has {} rows)",
                self.rows.len()
            )));
        }

        self.rows.drain(start - 1..end);
        Ok(())
    }
}
