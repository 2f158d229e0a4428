use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `sheet_rows` table exists.
fn sheet_rows_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='sheet_rows'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `sheet_rows` table.
///
/// Every sheet of the workbook lives in this one table; row order inside a
/// sheet is `id` order, and `cells` holds the row as a JSON array of strings.
fn create_sheet_rows_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sheet_rows (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            sheet      TEXT NOT NULL,
            cells      TEXT NOT NULL DEFAULT '[]',
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Index used by every per-sheet read and by positional deletes.
fn migrate_add_sheet_order_index(conn: &Connection) -> Result<Option<String>> {
    let version = "20250302_0002_sheet_order_index";

    if migration_applied(conn, version)? {
        return Ok(None);
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_sheet_rows_sheet_id ON sheet_rows(sheet, id);")?;
    mark_applied(conn, version, "Added (sheet, id) index to sheet_rows")?;

    Ok(Some(format!(
        "Migration applied: {} → indexed sheet_rows by sheet",
        version
    )))
}

/// Public entry point: run all pending migrations.
///
/// Safe to call on every open; each step is a no-op once applied. Returns
/// one line per step that actually ran, for `init` to report; ordinary
/// commands discard them.
pub fn run_pending_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut applied = Vec::new();

    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create sheet_rows table if missing
    if !sheet_rows_table_exists(conn)? {
        create_sheet_rows_table(conn)?;
        applied.push("Created sheet_rows table.".to_string());
    }

    // 3) Versioned steps
    applied.extend(migrate_add_sheet_order_index(conn)?);

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(run_pending_migrations(&conn).unwrap().len(), 2);
        assert!(run_pending_migrations(&conn).unwrap().is_empty());

        let applied: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(applied, 1);
        assert!(sheet_rows_table_exists(&conn).unwrap());
    }
}
