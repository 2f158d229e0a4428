// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

fn invalid(what: &str, raw: &str) -> AppError {
    AppError::ValidationFailed(format!("invalid {what} in range: '{raw}'"))
}

/// First and last day covered by a single period:
/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid("year", p))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid("year", p))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid("year", p))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid("month", p))?;
            let next = if d1.month() == 12 {
                NaiveDate::from_ymd_opt(d1.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(d1.year(), d1.month() + 1, 1)
            };
            let d2 = next
                .and_then(|n| n.pred_opt())
                .ok_or_else(|| invalid("month", p))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid("date", p))?;
            Ok((d, d))
        }
        _ => Err(invalid("period", p)),
    }
}

/// Parse --range (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any two of the above joined by `:`
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = match r.split_once(':') {
        Some((s, e)) => (period_bounds(s.trim())?.0, period_bounds(e.trim())?.1),
        None => period_bounds(r.trim())?,
    };

    if start > end {
        return Err(AppError::ValidationFailed(format!(
            "range '{r}' ends before it starts"
        )));
    }
    Ok((start, end))
}
