//! Aggregations behind the dashboard charts.

use crate::models::AttendanceLog;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// `(name, count)` pairs, most frequent first, ties by name.
pub fn count_by_name(log: &AttendanceLog) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in log {
        *counts.entry(r.name.as_str()).or_default() += 1;
    }

    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(name, n)| (name.to_string(), n))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// `(day, count)` pairs in calendar order. Rows whose timestamp cannot be
/// read are grouped under `None`, listed last.
pub fn count_by_day(log: &AttendanceLog) -> Vec<(Option<NaiveDate>, usize)> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    let mut unknown = 0usize;

    for r in log {
        match r.day() {
            Some(d) => *counts.entry(d).or_default() += 1,
            None => unknown += 1,
        }
    }

    let mut out: Vec<(Option<NaiveDate>, usize)> =
        counts.into_iter().map(|(d, n)| (Some(d), n)).collect();
    if unknown > 0 {
        out.push((None, unknown));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceRecord;

    fn log(rows: &[(&str, &str)]) -> AttendanceLog {
        AttendanceLog::new(
            rows.iter()
                .map(|(n, t)| AttendanceRecord {
                    name: n.to_string(),
                    timestamp: t.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn names_sorted_by_count_then_name() {
        let l = log(&[
            ("Bob", "2024-01-01 09:00:00"),
            ("Alice", "2024-01-01 09:01:00"),
            ("Bob", "2024-01-02 09:00:00"),
            ("Carol", "2024-01-02 09:03:00"),
        ]);
        assert_eq!(
            count_by_name(&l),
            vec![
                ("Bob".to_string(), 2),
                ("Alice".to_string(), 1),
                ("Carol".to_string(), 1)
            ]
        );
    }

    #[test]
    fn days_in_order_with_unknown_last() {
        let l = log(&[
            ("Bob", "2024-01-02 09:00:00"),
            ("Alice", "garbage"),
            ("Carol", "2024-01-01 08:00:00"),
            ("Dan", "2024-01-02 10:00:00"),
        ]);
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day);
        assert_eq!(
            count_by_day(&l),
            vec![(d(1), 1), (d(2), 2), (None, 1)]
        );
    }
}
