//! Backing stores: spreadsheet-like tables with one header row and 1-based
//! row addressing (the header is row 1).

mod memory;
mod sqlite;

pub use memory::MemorySheet;
pub use sqlite::SqliteSheet;

use crate::errors::AppResult;

/// Contract every backing store offers to the attendance facade.
///
/// Each call is one round trip and either applies completely or not at all.
/// Reads fail with `StoreUnavailable`; mutations fail with `WriteRejected`.
pub trait SheetBackend {
    /// All rows, header included, in sheet order.
    fn read_all_rows(&mut self) -> AppResult<Vec<Vec<String>>>;

    /// Add one row after the last one.
    fn append_row(&mut self, cells: &[String]) -> AppResult<()>;

    /// Remove rows `start..=end` (1-based, header counts as row 1).
    fn delete_rows(&mut self, start: usize, end: usize) -> AppResult<()>;

    fn delete_row(&mut self, row: usize) -> AppResult<()> {
        self.delete_rows(row, row)
    }
}
