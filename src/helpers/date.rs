//! Date helper functions

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

/// Format a `publishedAt` value for display
///
/// # Examples
/// ```ignore
/// format_published("2025-01-01", false) // -> "January 1, 2025"
/// format_published("2025-01-01", true)  // -> "January 1, 2025 (3d ago)"
/// ```
///
/// Unparseable input comes back unchanged rather than failing the page.
pub fn format_published(date: &str, include_relative: bool) -> String {
    let Some(target) = parse_iso_like(date) else {
        return date.to_string();
    };

    let full = target.format("%B %-d, %Y").to_string();
    if !include_relative {
        return full;
    }

    format!("{} ({})", full, relative_label(target.date(), Local::now().date_naive()))
}

/// Relative age in coarse calendar units ("3d ago", "2mo ago", "Today")
pub fn relative_label(target: NaiveDate, today: NaiveDate) -> String {
    let years = today.year() - target.year();
    let months = today.month() as i32 - target.month() as i32;
    let days = today.day() as i32 - target.day() as i32;

    if years > 0 {
        format!("{}y ago", years)
    } else if months > 0 {
        format!("{}mo ago", months)
    } else if days > 0 {
        format!("{}d ago", days)
    } else {
        "Today".to_string()
    }
}

/// Parse `YYYY-MM-DD`, appending midnight when the time part is absent
fn parse_iso_like(date: &str) -> Option<NaiveDateTime> {
    let padded = if date.contains('T') {
        date.to_string()
    } else {
        format!("{}T00:00:00", date)
    };
    NaiveDateTime::parse_from_str(&padded, "%Y-%m-%dT%H:%M:%S").ok()
}
