use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One day's cheapest one-way fare for a specific origin→destination pair.
///
/// Never constructed for a day the source marked unavailable or priceless —
/// the client filters those out before a quote exists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayQuote {
    /// Calendar date, ISO `YYYY-MM-DD`; unique key within its month map.
    pub day: String,
    /// Non-negative fare value in the requested currency.
    pub price: f64,
    /// Departure timestamp as supplied by the source. Display only.
    pub dep_iso: Option<String>,
    /// Arrival timestamp as supplied by the source. Display only.
    pub arr_iso: Option<String>,
}

/// Per-(route-direction, year, month, currency) map from ISO day to quote.
/// Immutable once cached.
///
/// A BTreeMap keeps iteration in date order, which candidate emission relies
/// on for determinism.
pub type MonthMap = BTreeMap<String, DayQuote>;
