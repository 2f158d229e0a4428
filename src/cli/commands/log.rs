use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::{LogEntry, load_log};
use crate::errors::AppResult;
use crate::sheet::SqliteSheet;
use crate::ui::messages::info;
use crate::utils::formatting::{pad_right, truncate};
use ansi_term::Colour;

/// Widest the "operation (target)" column may get.
const OP_COLUMN_MAX: usize = 60;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "clear" => Colour::Red,
        "export" => Colour::Cyan,
        "backup" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let sheet = SqliteSheet::open(&cfg.workbook, &cfg.sheet, &cfg.header)?;
        let entries = load_log(sheet.conn())?;
        print_entries(&entries);
    }

    Ok(())
}

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

fn print_entries(entries: &[LogEntry]) {
    if entries.is_empty() {
        info("The internal log is empty.");
        return;
    }

    let op_w = entries
        .iter()
        .map(|e| op_target(e).chars().count())
        .max()
        .unwrap_or(10)
        .min(OP_COLUMN_MAX);
    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);

    let dates: Vec<String> = entries
        .iter()
        .map(|e| {
            chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| e.date.clone())
        })
        .collect();
    let date_w = dates.iter().map(String::len).max().unwrap_or(0);

    println!("📜 Internal log:\n");

    for (e, date) in entries.iter().zip(dates) {
        let color = color_for_operation(&e.operation);
        let visible = truncate(&op_target(e), OP_COLUMN_MAX);

        // only the operation word is coloured
        let colored = match visible.split_once(' ') {
            Some((op, rest)) => format!("{} {}", color.paint(op), rest),
            None => color.paint(visible.as_str()).to_string(),
        };

        println!(
            "{:>id_w$}: {:<date_w$} | {} => {}",
            e.id,
            date,
            pad_right(&colored, op_w),
            e.message,
            id_w = id_w,
            date_w = date_w
        );
    }
}
