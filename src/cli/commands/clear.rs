use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ClearOutcome, Session};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { password, yes } = cmd {
        let session = Session::from_password(cfg, password.as_deref())?;
        session.require_admin()?;

        if !*yes && !confirm("Delete ALL records? This action is irreversible.")? {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = open_store(cfg)?;
        match store.clear_all()? {
            ClearOutcome::AlreadyEmpty => info("The log is already empty."),
            ClearOutcome::Cleared(n) => {
                success(format!("Deleted {} records.", n));
                store
                    .backend()
                    .audit("clear", &cfg.sheet, &format!("Deleted {} records", n));
            }
        }
    }

    Ok(())
}
