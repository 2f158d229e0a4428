use crate::cli::commands::open_store;
use crate::cli::parser::{Commands, StatsBy};
use crate::config::Config;
use crate::core::stats::{count_by_day, count_by_name};
use crate::errors::AppResult;
use crate::models::AttendanceLog;
use crate::ui::chart::render_bars;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { by, width } = cmd {
        let mut store = open_store(cfg)?;
        let log = store.load()?;
        print_charts(&log, *by, usize::from(*width));
    }
    Ok(())
}

pub(crate) fn print_charts(log: &AttendanceLog, by: StatsBy, width: usize) {
    if log.is_empty() {
        info("Nothing to chart yet.");
        return;
    }

    println!("🥛 {} cartons in total\n", log.len());

    if matches!(by, StatsBy::Name | StatsBy::Both) {
        print!("{}", render_bars("By name", &count_by_name(log), width));
    }

    if by == StatsBy::Both {
        println!();
    }

    if matches!(by, StatsBy::Day | StatsBy::Both) {
        let rows: Vec<(String, usize)> = count_by_day(log)
            .into_iter()
            .map(|(d, n)| {
                let label = d
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                (label, n)
            })
            .collect();
        print!("{}", render_bars("By day", &rows, width));
    }
}
