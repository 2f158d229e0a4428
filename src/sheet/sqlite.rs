use super::SheetBackend;
use crate::db::log::ttlog;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use rusqlite::{Connection, params};
use std::path::Path;

/// A named sheet inside a SQLite workbook file.
pub struct SqliteSheet {
    pool: DbPool,
    name: String,
}

fn unavailable<E: std::fmt::Display>(e: E) -> AppError {
    AppError::StoreUnavailable(e.to_string())
}

fn rejected<E: std::fmt::Display>(e: E) -> AppError {
    AppError::WriteRejected(e.to_string())
}

impl SqliteSheet {
    /// Open `sheet` in the workbook at `path`.
    ///
    /// The workbook must already exist (see `milklog init`). Pending
    /// migrations are applied and the header row is written if the sheet
    /// has no rows yet.
    pub fn open(path: &str, sheet: &str, header: &[String]) -> AppResult<Self> {
        if !Path::new(path).exists() {
            return Err(AppError::StoreUnavailable(format!(
                "workbook not found: {path}"
            )));
        }

        let pool = DbPool::open_existing(path).map_err(unavailable)?;
        run_pending_migrations(&pool.conn).map_err(unavailable)?;

        let mut this = Self {
            pool,
            name: sheet.to_string(),
        };
        this.ensure_header(header)?;
        Ok(this)
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// Write an audit line; failures are reported but never block the
    /// operation that triggered them.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    fn row_count(&self) -> rusqlite::Result<usize> {
        let n: i64 = self.pool.conn.query_row(
            "SELECT COUNT(*) FROM sheet_rows WHERE sheet = ?1",
            [&self.name],
            |row| row.get(0),
        )?;
        Ok(n as usize)
    }

    fn ensure_header(&mut self, header: &[String]) -> AppResult<()> {
        if self.row_count().map_err(unavailable)? == 0 {
            self.append_row(header)?;
        }
        Ok(())
    }
}

impl SheetBackend for SqliteSheet {
    fn read_all_rows(&mut self) -> AppResult<Vec<Vec<String>>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT id, cells FROM sheet_rows WHERE sheet = ?1 ORDER BY id ASC")
            .map_err(unavailable)?;

        let rows = stmt
            .query_map([&self.name], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(unavailable)?;

        let mut out = Vec::new();
        for r in rows {
            let (id, raw) = r.map_err(unavailable)?;
            let cells: Vec<String> = serde_json::from_str(&raw).map_err(|e| {
                AppError::StoreUnavailable(format!("malformed row (id {id}): {e}"))
            })?;
            out.push(cells);
        }
        Ok(out)
    }

    fn append_row(&mut self, cells: &[String]) -> AppResult<()> {
        let encoded = serde_json::to_string(cells).map_err(rejected)?;

        self.pool
            .conn
            .execute(
                "INSERT INTO sheet_rows (sheet, cells) VALUES (?1, ?2)",
                params![self.name, encoded],
            )
            .map_err(rejected)?;
        Ok(())
    }

    fn delete_rows(&mut self, start: usize, end: usize) -> AppResult<()> {
        if start < 2 || end < start {
            return Err(AppError::WriteRejected(format!(
                "invalid row range {start}..={end}"
            )));
        }

        let sheet = self.name.clone();
        let wanted = end - start + 1;

        self.pool
            .with_conn(|conn| {
                let tx = conn.transaction()?;

                let ids: Vec<i64> = {
                    let mut stmt = tx.prepare(
                        "SELECT id FROM sheet_rows WHERE sheet = ?1
                         ORDER BY id ASC LIMIT ?2 OFFSET ?3",
                    )?;
                    stmt.query_map(params![sheet, wanted as i64, (start - 1) as i64], |row| {
                        row.get(0)
                    })?
                    .collect::<rusqlite::Result<_>>()?
                };

                if ids.len() != wanted {
                    // dropping the transaction rolls it back
                    return Ok(false);
                }

                for id in &ids {
                    tx.execute("DELETE FROM sheet_rows WHERE id = ?1", [id])?;
                }
                tx.commit()?;
                Ok(true)
            })
            .map_err(rejected)
            .and_then(|done| {
                if done {
                    Ok(())
                } else {
                    Err(AppError::WriteRejected(format!(
                        "rows {start}..={end} do not exist in sheet '{}'",
                        self.name
                    )))
                }
            })
    }
}
