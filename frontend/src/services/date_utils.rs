use chrono::{NaiveDate, NaiveDateTime};
use js_sys::Date;

/// Current local wall-clock time as reported by the browser
pub fn local_now() -> NaiveDateTime {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .and_then(|date| date.and_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds()))
        .unwrap_or_else(|| chrono::Local::now().naive_local())
}

pub fn today() -> NaiveDate {
    local_now().date()
}

/// Format a YYYY-MM-DD (optionally followed by a time) for display, e.g. "Wednesday, December 4, 2024"
pub fn format_date_for_display(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%A, %B %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}
