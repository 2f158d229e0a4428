use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::AttendanceLog;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { today } = cmd {
        let mut store = open_store(cfg)?;
        let log = store.load()?;

        let day = today.then(|| Local::now().date_naive());
        print_log(&log, day, &cfg.header);
    }

    Ok(())
}

/// Print the log as a numbered table; positions are 1-based and always
/// refer to the full log, even when filtered to one day.
pub(crate) fn print_log(log: &AttendanceLog, day: Option<chrono::NaiveDate>, titles: &[String]) {
    header("Who finished their milk");

    let mut table = Table::new(vec![
        Column::new("#"),
        Column::new(titles.first().map(String::as_str).unwrap_or("name")),
        Column::new(titles.get(1).map(String::as_str).unwrap_or("timestamp")),
    ]);

    for (i, rec) in log.iter().enumerate() {
        if let Some(d) = day
            && rec.day() != Some(d)
        {
            continue;
        }
        table.add_row(vec![
            (i + 1).to_string(),
            rec.name.clone(),
            rec.timestamp.clone(),
        ]);
    }

    if table.rows.is_empty() {
        info("Nobody has registered yet.");
        return;
    }

    print!("{}", table.render());
}
