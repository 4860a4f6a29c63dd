//! Display helpers: dates, file sizes and plain-text previews.

use chrono::{DateTime, Local, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Preview length used by document lists.
pub const DEFAULT_PREVIEW_LENGTH: usize = 150;

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats the date part of `ts` as `YYYY/M/D` in the local time zone.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    format_date_in(ts, &Local)
}

/// Formats the date part of `ts` as `YYYY/M/D` in `tz`.
pub fn format_date_in<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%Y/%-m/%-d").to_string()
}

/// Human readable size in Bytes, KB, MB or GB (base 1024), at most two decimals.
///
/// `0` is `"0 Bytes"`, `1536` is `"1.5 KB"`, `1048576` is `"1 MB"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut threshold: u64 = 1024;
    while unit < SIZE_UNITS.len() - 1 && bytes >= threshold {
        unit += 1;
        threshold = threshold.saturating_mul(1024);
    }

    let scaled = bytes as f64 / 1024f64.powi(unit as i32);
    // Ties round up: 1.125 KB is "1.13 KB".
    let rounded = (scaled * 100.0).round() / 100.0;
    let mut value = format!("{:.2}", rounded);
    if value.contains('.') {
        value = value.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    format!("{} {}", value, SIZE_UNITS[unit])
}

static MARKDOWN_SYNTAX: Lazy<[(Regex, &'static str); 5]> = Lazy::new(|| {
    [
        (Regex::new(r"#{1,6}\s+").unwrap(), ""),
        (Regex::new(r"\*{1,2}([^*]+)\*{1,2}").unwrap(), "$1"),
        (Regex::new(r"`([^`]+)`").unwrap(), "$1"),
        (Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap(), "$1"),
        (Regex::new(r">\s+").unwrap(), ""),
    ]
});

/// Strips common Markdown markers from `markdown` and truncates it to `max_length`
/// characters, appending `...` when something was cut.
pub fn preview(markdown: &str, max_length: usize) -> String {
    let mut text = markdown.to_string();
    for (pattern, replacement) in MARKDOWN_SYNTAX.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }
    let text = text.trim();

    match text.char_indices().nth(max_length) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
