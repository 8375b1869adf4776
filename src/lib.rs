// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod report;
pub mod search;
pub mod utils;

// Re-export commonly used types
pub use data::{MonthFareSource, QuoteCache, RyanairSource};
pub use domain::{Candidate, DayQuote, MonthKey, MonthMap, Route};
pub use search::{SearchRequest, SearchResponse, run_search};

// CLI argument parsing
use chrono::{Days, NaiveDate};
use clap::Parser;

use config::SEARCH;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Find the cheapest round-trip combinations per route", long_about = None)]
pub struct Cli {
    /// Route as an ORG-DST IATA pair; pass twice to compare two routes.
    /// Defaults to the CGN-PMO / NRN-TPS preset when omitted.
    #[arg(long = "route", value_name = "ORG-DST")]
    pub routes: Vec<Route>,

    /// First allowed travel day (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last allowed travel day (YYYY-MM-DD); defaults to the start plus 30 days
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Minimum days between outbound and return
    #[arg(long, default_value_t = SEARCH.min_days)]
    pub min_days: u64,

    /// Maximum days between outbound and return
    #[arg(long, default_value_t = SEARCH.max_days)]
    pub max_days: u64,

    /// How many results to keep per ranking table
    #[arg(long, default_value_t = SEARCH.top_n)]
    pub top_n: usize,

    /// ISO currency code for all quotes
    #[arg(long, default_value = SEARCH.currency)]
    pub currency: String,

    /// Dump the full response as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    /// Fill in defaults and turn the parsed flags into an engine request.
    pub fn to_request(&self, today: NaiveDate) -> SearchRequest {
        let routes = if self.routes.is_empty() {
            SEARCH
                .preset_routes
                .iter()
                .map(|(origin, dest)| Route::new(origin, dest))
                .collect()
        } else {
            self.routes.clone()
        };
        let start_date = self.from.unwrap_or(today);
        let end_date = self.to.unwrap_or_else(|| {
            start_date
                .checked_add_days(Days::new(SEARCH.span_days))
                .unwrap_or(start_date)
        });
        SearchRequest {
            routes,
            start_date,
            end_date,
            min_days: self.min_days,
            max_days: self.max_days,
            currency: self.currency.to_uppercase(),
            top_n: self.top_n,
        }
    }
}
