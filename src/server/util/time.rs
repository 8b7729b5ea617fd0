use chrono::{DateTime, Datelike, Utc};

/// Identifies the ISO week containing `at` as `iso_year * 100 + iso_week`.
///
/// Uses the ISO year, so the first days of January can belong to the previous year's week.
pub fn iso_week_key(at: DateTime<Utc>) -> i32 {
    let week = at.iso_week();
    week.year() * 100 + week.week() as i32
}
