//! Horizontal bar charts for the terminal.

use crate::utils::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

const BAR: char = '█';

/// Longest bar, in cells, a chart will ever draw.
pub const MAX_BAR_WIDTH: usize = 200;

/// Render `rows` as labelled bars scaled so the largest value spans
/// `width` cells (clamped to `1..=MAX_BAR_WIDTH`). Every non-zero value
/// gets at least one cell.
pub fn render_bars(title: &str, rows: &[(String, usize)], width: usize) -> String {
    let mut out = format!("{title}\n");

    if rows.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let label_w = rows
        .iter()
        .map(|(label, _)| UnicodeWidthStr::width(label.as_str()))
        .max()
        .unwrap_or(0);
    let max = rows.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1);
    let count_w = max.to_string().len();
    let width = width.clamp(1, MAX_BAR_WIDTH);

    for (label, n) in rows {
        let cells = if *n == 0 {
            0
        } else {
            let scaled = (*n as u128 * width as u128) / max as u128;
            (scaled as usize).max(1)
        };
        out.push_str(&format!(
            "{} │{} {}\n",
            pad_right(label, label_w),
            BAR.to_string().repeat(cells),
            pad_left(&n.to_string(), count_w)
        ));
    }

    out
}
