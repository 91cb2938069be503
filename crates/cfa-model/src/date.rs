//! Rendering of backend ISO 8601 timestamps for display.
//!
//! Unparseable input is returned unchanged rather than rejected.

use time::{OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339, macros::format_description};

/// `"Feb 10, 2025 at 3:00 PM"` in the given offset.
pub fn format_service_datetime(raw: &str, offset: UtcOffset) -> String {
    let format = format_description!(
        "[month repr:short] [day padding:none], [year] at [hour repr:12 padding:none]:[minute] [period]"
    );

    parse(raw, offset)
        .and_then(|dt| dt.format(&format).ok())
        .unwrap_or_else(|| raw.to_string())
}

/// `"January 12th, 2024"` in the given offset.
pub fn format_long_date(raw: &str, offset: UtcOffset) -> String {
    match parse(raw, offset) {
        Some(dt) => {
            let day = dt.day();
            format!("{} {}{}, {}", dt.month(), day, ordinal_suffix(day), dt.year())
        }
        None => raw.to_string(),
    }
}

fn parse(raw: &str, offset: UtcOffset) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw.trim(), &Rfc3339)
        .ok()
        .map(|dt| dt.to_offset(offset))
}

fn ordinal_suffix(day: u8) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
