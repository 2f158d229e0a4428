use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::{fill_missing, missing_fields};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            // never echo the admin secret
            let shown = Config {
                admin_password: cfg.admin_password.as_ref().map(|_| "********".to_string()),
                ..cfg.clone()
            };
            println!("{}", shown.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let missing = missing_fields(&path)?;
            if missing.is_empty() {
                success(format!("{} is complete.", path.display()));
            } else {
                warning(format!(
                    "{} is missing: {}",
                    path.display(),
                    missing.join(", ")
                ));
                info("Run `milklog config --migrate` to add the defaults.");
            }
        }

        // ---- MIGRATE CONFIG ----
        if *migrate {
            fill_missing(&path)?;
        }
    }

    Ok(())
}
