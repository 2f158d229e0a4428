use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Session;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { position, password } = cmd {
        let session = Session::from_password(cfg, password.as_deref())?;
        session.require_admin()?;

        let mut store = open_store(cfg)?;
        let removed = store.delete_display(*position)?;

        success(format!(
            "Deleted #{}: {} ({})",
            position, removed.name, removed.timestamp
        ));

        store.backend().audit(
            "del",
            &removed.name,
            &format!("Deleted #{} recorded at {}", position, removed.timestamp),
        );
    }

    Ok(())
}
