use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::record::parse_timestamp;
use crate::ui::messages::success;

/// Register one name.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, at } = cmd {
        //
        // 1. Parse the optional timestamp before touching the workbook
        //
        let at = at.as_deref().map(parse_timestamp).transpose()?;

        //
        // 2. Open the sheet and append
        //
        let mut store = open_store(cfg)?;
        let record = match at {
            Some(ts) => store.append(name, ts)?,
            None => store.append_now(name)?,
        };

        success(format!(
            "🥛 {}, well done! Recorded at {}.",
            record.name, record.timestamp
        ));

        //
        // 3. Audit
        //
        store
            .backend()
            .audit("add", &record.name, &format!("Recorded at {}", record.timestamp));
    }

    Ok(())
}
