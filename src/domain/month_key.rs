use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One calendar month of one year. Cheap copyable key for month-scoped fare maps.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct MonthKey {
    pub year: i32,
    /// 1..=12
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }

    /// All (year, month) pairs touched by the inclusive span `[start, end]`,
    /// in chronological order, rolling the year over after December.
    ///
    /// Callers guarantee `start <= end` (validated upstream); a degenerate
    /// span yields exactly one entry.
    pub fn span(start: NaiveDate, end: NaiveDate) -> Vec<MonthKey> {
        debug_assert!(start <= end, "month span called with start > end");
        let last = MonthKey::of(end);
        let mut current = MonthKey::of(start);
        let mut months = Vec::new();
        while current <= last {
            months.push(current);
            current = current.next();
        }
        months
    }

    fn next(self) -> MonthKey {
        if self.month == 12 {
            MonthKey {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthKey {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
