//! milklog library root.
//! Exposes the CLI parser, the high-level run() function, the attendance
//! store facade and its backing sheets.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod sheet;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Kiosk { .. } => cli::commands::kiosk::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ `init` is the only command that works without a config
    if matches!(cli.command, Commands::Init) {
        return cli::commands::init::handle(&cli);
    }

    // 3️⃣ load config ONCE, with the command-line overrides applied
    let mut cfg = Config::load(cli.workbook.as_deref())?;
    if let Some(sheet) = &cli.sheet {
        cfg.sheet = sheet.clone();
        cfg.validate()?;
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
