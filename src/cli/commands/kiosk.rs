//! Registration desk: one line of stdin per action, sharing a single store
//! (and therefore a single cache) for the whole session.

use crate::cli::commands::list::print_log;
use crate::cli::commands::open_store;
use crate::cli::commands::stats::print_charts;
use crate::cli::parser::{Commands, StatsBy};
use crate::config::Config;
use crate::core::{AttendanceStore, ClearOutcome, Session};
use crate::errors::{AppError, AppResult};
use crate::sheet::SqliteSheet;
use crate::ui::messages::{error, info, success};
use crate::ui::prompt::confirm_from;
use std::io::{self, BufRead, Write};

const CHART_WIDTH: usize = 30;

/// What a single input line asks for.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum KioskAction<'a> {
    Register(&'a str),
    List,
    Stats,
    Admin(&'a str),
    Logout,
    Delete(&'a str),
    Clear,
    Help,
    Quit,
    Skip,
}

pub(crate) fn parse_line(line: &str) -> KioskAction<'_> {
    let line = line.trim();
    if line.is_empty() {
        return KioskAction::Skip;
    }
    let Some(cmd) = line.strip_prefix(':') else {
        return KioskAction::Register(line);
    };

    let (word, arg) = match cmd.split_once(char::is_whitespace) {
        Some((w, a)) => (w, a.trim()),
        None => (cmd, ""),
    };

    match word {
        "list" => KioskAction::List,
        "stats" => KioskAction::Stats,
        "admin" => KioskAction::Admin(arg),
        "logout" => KioskAction::Logout,
        "del" => KioskAction::Delete(arg),
        "clear" => KioskAction::Clear,
        "quit" | "q" | "exit" => KioskAction::Quit,
        _ => KioskAction::Help,
    }
}

fn print_help() {
    info("Type a name to register it, or one of:");
    println!("  :list           show the log");
    println!("  :stats          show the charts");
    println!("  :admin <pw>     become admin");
    println!("  :logout         back to guest");
    println!("  :del <n>        delete entry #n (admin)");
    println!("  :clear          delete every entry (admin)");
    println!("  :quit           leave the kiosk");
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Kiosk { password } = cmd {
        let mut session = Session::from_password(cfg, password.as_deref())?;
        let mut store = open_store(cfg)?;

        println!("🥛 milklog kiosk. Type a name, or :help.");
        if session.is_admin() {
            info("Admin session.");
        }

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut line = String::new();
        loop {
            print!("> ");
            io::stdout().flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match step(&mut store, &mut session, cfg, &line, &mut input) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => error(&e),
            }
        }

        println!("👋 Bye.");
    }

    Ok(())
}

/// Run one line. Returns `Ok(false)` when the session should end.
/// Confirmations are read from `input`, the same stream the lines come from.
fn step<R: BufRead>(
    store: &mut AttendanceStore<SqliteSheet>,
    session: &mut Session,
    cfg: &Config,
    line: &str,
    input: &mut R,
) -> AppResult<bool> {
    match parse_line(line) {
        KioskAction::Skip => {}
        KioskAction::Quit => return Ok(false),
        KioskAction::Help => print_help(),
        KioskAction::Register(name) => {
            let rec = store.append_now(name)?;
            success(format!("🥛 {}, well done!", rec.name));
            store
                .backend()
                .audit("add", &rec.name, &format!("Recorded at {}", rec.timestamp));
        }
        KioskAction::List => print_log(&store.load()?, None, &cfg.header),
        KioskAction::Stats => print_charts(&store.load()?, StatsBy::Both, CHART_WIDTH),
        KioskAction::Admin(pw) => {
            *session = Session::login(cfg, pw)?;
            success("Admin session started.");
        }
        KioskAction::Logout => {
            *session = Session::guest();
            info("Back to guest.");
        }
        KioskAction::Delete(arg) => {
            session.require_admin()?;
            let position: i64 = arg
                .parse()
                .map_err(|_| AppError::ValidationFailed(format!("not a position: '{arg}'")))?;
            let rec = store.delete_display(position)?;
            success(format!("Deleted #{}: {} ({})", position, rec.name, rec.timestamp));
            store.backend().audit(
                "del",
                &rec.name,
                &format!("Deleted #{} recorded at {}", position, rec.timestamp),
            );
        }
        KioskAction::Clear => {
            session.require_admin()?;
            if !confirm_from(input, "Delete ALL records? This action is irreversible.")? {
                info("Operation cancelled.");
                return Ok(true);
            }
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
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_register_names() {
        assert_eq!(parse_line("  Alice \n"), KioskAction::Register("Alice"));
        assert_eq!(parse_line("   "), KioskAction::Skip);
    }

    #[test]
    fn colon_commands_take_arguments() {
        assert_eq!(parse_line(":del 3"), KioskAction::Delete("3"));
        assert_eq!(parse_line(":admin  s3cret "), KioskAction::Admin("s3cret"));
        assert_eq!(parse_line(":q"), KioskAction::Quit);
        assert_eq!(parse_line(":nope"), KioskAction::Help);
    }
}
