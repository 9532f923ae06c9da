use chrono::{Local, NaiveDate, NaiveTime};

/// Calendar date on the user's machine; the attendance page starts here.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now_local_time() -> NaiveTime {
    Local::now().time()
}

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn format_date_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// e.g. "Wed, Jan 10 2024" for history rows.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d %Y").to_string()
}
