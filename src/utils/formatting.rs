//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

/// Pad to a *display* width, so Hangul and other wide characters line up
/// in terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(strip_ansi(s).as_str());
    format!("{}{}", s, " ".repeat(width.saturating_sub(visible)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(strip_ansi(s).as_str());
    format!("{}{}", " ".repeat(width.saturating_sub(visible)), s)
}

/// Remove ANSI colour sequences.
pub fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"));
    re.replace_all(s, "").into_owned()
}

/// Cut `s` to at most `max` characters, ending with "..." when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_right_uses_display_width() {
        assert_eq!(pad_right("Bob", 5), "Bob  ");
        // each Hangul syllable is two columns wide
        assert_eq!(pad_right("민준", 6), "민준  ");
        assert_eq!(pad_left("7", 3), "  7");
    }

    #[test]
    fn strip_and_truncate() {
        assert_eq!(strip_ansi("\x1b[32madd\x1b[0m"), "add");
        assert_eq!(truncate("abcdefghij", 6), "abc...");
        assert_eq!(truncate("abc", 6), "abc");
    }
}
