//! The round-trip matching engine: one route, one date window.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Days, NaiveDate};

use super::ranking::sort_candidates;
use crate::data::{CacheKey, MonthFareSource, QuoteCache};
use crate::domain::{Candidate, MonthKey, MonthMap, Route};
use crate::utils::{format_iso_day, parse_iso_day};

/// Inclusive calendar window both legs of a trip must fall inside.
#[derive(Debug, Clone, Copy)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Inclusive bounds on the number of days between outbound and return.
#[derive(Debug, Clone, Copy)]
pub struct StayBounds {
    pub min_days: u64,
    pub max_days: u64,
}

/// Enumerate every feasible round trip for `route` inside `window`.
///
/// Outbound fares price origin→dest, return fares dest→origin; both
/// directions are loaded month by month through the shared per-run cache
/// (the directions never collide on a key, see [`CacheKey`]). An empty or
/// absent month map on either side simply produces no candidates for that
/// pairing — it is not an error.
///
/// The result is sorted ascending by `(total, out_day)`: cheapest first,
/// earlier departure breaking ties.
pub async fn match_route(
    route: &Route,
    window: DateWindow,
    stay: StayBounds,
    currency: &str,
    cache: &QuoteCache,
    source: &dyn MonthFareSource,
) -> Vec<Candidate> {
    let months = MonthKey::span(window.start, window.end);

    let mut out_maps: HashMap<MonthKey, Arc<MonthMap>> = HashMap::new();
    let mut ret_maps: HashMap<MonthKey, Arc<MonthMap>> = HashMap::new();
    for mk in &months {
        let key = CacheKey::new(&route.origin, &route.dest, mk.year, mk.month, currency);
        out_maps.insert(*mk, cache.get_or_fetch(key, source).await);
    }
    for mk in &months {
        let key = CacheKey::new(&route.dest, &route.origin, mk.year, mk.month, currency);
        ret_maps.insert(*mk, cache.get_or_fetch(key, source).await);
    }

    let label = route.label();
    let mut candidates = Vec::new();
    // Months ascending, then days ascending within each month map: emission
    // order is deterministic, so equal sort keys keep a stable order.
    for mk in &months {
        let Some(out_map) = out_maps.get(mk) else {
            continue;
        };
        for (out_day, out_quote) in out_map.iter() {
            let Some(out_date) = parse_iso_day(out_day) else {
                continue;
            };
            if !window.contains(out_date) {
                continue;
            }
            for span in stay.min_days..=stay.max_days {
                let Some(ret_date) = out_date.checked_add_days(Days::new(span)) else {
                    continue;
                };
                if !window.contains(ret_date) {
                    continue;
                }
                let Some(ret_map) = ret_maps.get(&MonthKey::of(ret_date)) else {
                    continue;
                };
                let ret_day = format_iso_day(ret_date);
                let Some(ret_quote) = ret_map.get(&ret_day) else {
                    continue;
                };
                candidates.push(Candidate {
                    total: out_quote.price + ret_quote.price,
                    out_day: out_day.clone(),
                    ret_day,
                    out_price: out_quote.price,
                    ret_price: ret_quote.price,
                    dep_out: out_quote.dep_iso.clone(),
                    arr_out: out_quote.arr_iso.clone(),
                    dep_ret: ret_quote.dep_iso.clone(),
                    arr_ret: ret_quote.arr_iso.clone(),
                    route_label: label.clone(),
                });
            }
        }
    }

    sort_candidates(&mut candidates);
    candidates
}
