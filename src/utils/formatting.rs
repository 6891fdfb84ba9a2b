//! Formatting utilities used for the summary and the countdown.

use chrono::Duration;
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Remove ANSI escape sequences.
pub fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[A-Za-z]").expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}

/// Columns a string occupies on screen, ignoring color codes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Pad to `width` visible columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// "5 hours and 20 minutes", truncated to whole minutes.
pub fn format_hm(d: Duration) -> String {
    let mins = d.num_minutes();
    let sign = if mins < 0 { "-" } else { "" };
    let hours = mins.abs() / 60;
    let minutes = mins.abs() % 60;
    format!(
        "{}{} {} and {} {}",
        sign,
        hours,
        if hours == 1 { "hour" } else { "hours" },
        minutes,
        if minutes == 1 { "minute" } else { "minutes" }
    )
}

/// Remaining time column, e.g. 01:05:09. Negative durations show as zero.
pub fn format_hms(d: Duration) -> String {
    let secs = d.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
