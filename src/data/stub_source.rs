//! In-memory fare source for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::source::MonthFareSource;
use crate::domain::{DayQuote, MonthMap};

type DirectionKey = (String, String, i32, u32);

/// Serves canned month maps and counts how often it is queried.
#[derive(Default)]
pub struct StubSource {
    maps: HashMap<DirectionKey, MonthMap>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register quotes as (iso_day, price) pairs for one direction-month.
    pub fn with_days(
        mut self,
        origin: &str,
        dest: &str,
        year: i32,
        month: u32,
        days: &[(&str, f64)],
    ) -> Self {
        let mut map = MonthMap::new();
        for (day, price) in days {
            map.insert(
                day.to_string(),
                DayQuote {
                    day: day.to_string(),
                    price: *price,
                    dep_iso: None,
                    arr_iso: None,
                },
            );
        }
        self.maps
            .insert((origin.to_string(), dest.to_string(), year, month), map);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MonthFareSource for StubSource {
    fn signature(&self) -> &'static str {
        "in-memory stub"
    }

    async fn cheapest_per_day(
        &self,
        origin: &str,
        dest: &str,
        year: i32,
        month: u32,
        _currency: &str,
    ) -> MonthMap {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.maps
            .get(&(origin.to_string(), dest.to_string(), year, month))
            .cloned()
            .unwrap_or_default()
    }
}
