use chrono::NaiveDate;

pub const ISO_DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO `YYYY-MM-DD` day string. None on malformed input.
pub fn parse_iso_day(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, ISO_DAY_FORMAT).ok()
}

pub fn format_iso_day(date: NaiveDate) -> String {
    date.format(ISO_DAY_FORMAT).to_string()
}

/// Time-of-day (`HH:MM`) of an ISO timestamp, for display purposes.
/// Returns `-` when the timestamp is absent or malformed.
pub fn hhmm(ts: Option<&str>) -> String {
    let time = ts
        .and_then(|t| t.split_once('T'))
        .and_then(|(_, time)| time.get(..5));
    match time {
        Some(time) => time.to_string(),
        None => "-".to_string(),
    }
}
