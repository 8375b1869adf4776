pub mod time_utils;

pub use time_utils::{format_iso_day, hhmm, parse_iso_day};
