use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let mut store = open_store(cfg)?;
        let log = store.load_fresh()?;

        let n = ExportLogic::export(&log, *format, file, range.as_deref(), &cfg.sheet, *force)?;

        if n > 0 {
            store.backend().audit(
                "export",
                file,
                &format!("Exported {} records as {}", n, format.as_str()),
            );
        }
    }
    Ok(())
}
