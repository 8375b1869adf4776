//! One search run: request validation, per-route matching, ranking,
//! chart series, and the single-error failure contract.

pub mod chart;
pub mod matcher;
pub mod ranking;

pub use matcher::{DateWindow, StayBounds, match_route};

use std::collections::HashMap;

use anyhow::{Result, bail};
use chrono::NaiveDate;
use serde::Serialize;

use crate::config::search::MAX_ROUTES;
use crate::data::{MonthFareSource, QuoteCache};
use crate::domain::{Candidate, Route};

/// Everything one search run needs, validated up front.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// 1 or 2 routes, compared side by side when there are two.
    pub routes: Vec<Route>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub min_days: u64,
    pub max_days: u64,
    /// ISO currency code passed through to the price source.
    pub currency: String,
    /// Result-set cap per ranking table.
    pub top_n: usize,
}

impl SearchRequest {
    /// Reject impossible inputs before any matching runs. The engine's
    /// internals assume these invariants hold and do not re-check them.
    pub fn validate(&self) -> Result<()> {
        if self.routes.is_empty() {
            bail!("at least one route is required");
        }
        if self.routes.len() > MAX_ROUTES {
            bail!(
                "at most {} routes per search, got {}",
                MAX_ROUTES,
                self.routes.len()
            );
        }
        if self.end_date < self.start_date {
            bail!(
                "end date {} lies before start date {}",
                self.end_date,
                self.start_date
            );
        }
        if self.min_days == 0 {
            bail!("minimum stay must be at least 1 day");
        }
        if self.max_days < self.min_days {
            bail!(
                "maximum stay ({}) is below minimum stay ({})",
                self.max_days,
                self.min_days
            );
        }
        if self.top_n == 0 {
            bail!("top-N must be positive");
        }
        Ok(())
    }
}

/// Ranked results of one search run.
#[derive(Debug, Serialize, Default)]
pub struct SearchResponse {
    /// Route label → its top-N candidates, cheapest first.
    pub per_route: HashMap<String, Vec<Candidate>>,
    /// Cross-route leaderboard; stays empty for single-route searches.
    pub combined: Vec<Candidate>,
    /// Route label → (outbound date, cheapest total) points, unsorted.
    pub chart_series: HashMap<String, Vec<(NaiveDate, f64)>>,
    /// `None` on success. A failed search carries one message and no results.
    pub error: Option<String>,
}

/// Run one full search: all requested routes against one fresh cache.
///
/// Either completes with full per-route and combined rankings, or reports a
/// single error with any partial results discarded — never a mix. A search
/// with zero feasible candidates is a success with empty result sets.
pub async fn run_search(request: &SearchRequest, source: &dyn MonthFareSource) -> SearchResponse {
    match run_search_inner(request, source).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("search failed: {e:#}");
            SearchResponse {
                error: Some(format!("{e:#}")),
                ..Default::default()
            }
        }
    }
}

async fn run_search_inner(
    request: &SearchRequest,
    source: &dyn MonthFareSource,
) -> Result<SearchResponse> {
    request.validate()?;

    let started = std::time::Instant::now();
    // The cache lives exactly as long as this run; no cross-run reuse.
    let cache = QuoteCache::new();
    let window = DateWindow {
        start: request.start_date,
        end: request.end_date,
    };
    let stay = StayBounds {
        min_days: request.min_days,
        max_days: request.max_days,
    };

    let mut per_route = HashMap::new();
    let mut chart_series = HashMap::new();
    let mut all_candidates: Vec<Candidate> = Vec::new();

    for route in &request.routes {
        let candidates =
            match_route(route, window, stay, &request.currency, &cache, source).await;
        log::info!("{}: {} feasible round trips", route.label(), candidates.len());

        per_route.insert(route.label(), ranking::take_top(&candidates, request.top_n));
        chart_series.insert(route.label(), chart::cheapest_per_departure(&candidates));
        all_candidates.extend(candidates);
    }

    // The full union of candidates competes here, not just each route's top-N.
    let combined = if request.routes.len() >= 2 {
        ranking::combined_ranking(all_candidates, request.top_n)
    } else {
        Vec::new()
    };

    log::info!("search completed in {:?}", started.elapsed());
    Ok(SearchResponse {
        per_route,
        combined,
        chart_series,
        error: None,
    })
}
