use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::sheet::SqliteSheet;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite workbook and its pending migrations
///  - the header row of the configured sheet
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURATION
    //
    let cfg = Config::init_all(cli.workbook.clone(), cli.sheet.clone(), cli.test)?;

    println!("⚙️  Initializing milklog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Workbook   : {}", &cfg.workbook);
    println!("📑 Sheet      : {}", &cfg.sheet);

    //
    // 2️⃣ SCHEMA
    //
    let pool = DbPool::open_existing(&cfg.workbook)?;
    for note in run_pending_migrations(&pool.conn)? {
        success(note);
    }
    drop(pool);

    //
    // 3️⃣ SHEET + HEADER
    //
    let sheet = SqliteSheet::open(&cfg.workbook, &cfg.sheet, &cfg.header)?;

    println!("✅ Workbook initialized at {}", &cfg.workbook);

    //
    // 4️⃣ INTERNAL LOG (non-blocking)
    //
    sheet.audit(
        "init",
        &cfg.sheet,
        &format!("Workbook initialized at {}", &cfg.workbook),
    );

    println!("🎉 milklog initialization completed!");
    Ok(())
}
