use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::source::MonthFareSource;
use crate::domain::MonthMap;

/// Composite cache key: one route direction, one month, one currency.
/// Outbound and return legs of the same route never share a key because the
/// origin/destination ordering differs.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct CacheKey {
    pub origin: String,
    pub dest: String,
    pub year: i32,
    pub month: u32,
    pub currency: String,
}

impl CacheKey {
    pub fn new(origin: &str, dest: &str, year: i32, month: u32, currency: &str) -> Self {
        CacheKey {
            origin: origin.to_string(),
            dest: dest.to_string(),
            year,
            month,
            currency: currency.to_string(),
        }
    }
}

/// Per-search-run memoization of month fare maps.
///
/// One instance is created at the start of a search run and dropped with it;
/// it must not be shared between concurrently executing searches. A key is
/// queried against the source at most once per run — empty fetch results are
/// cached as such, there is no implicit retry.
pub struct QuoteCache {
    entries: Mutex<HashMap<CacheKey, Arc<MonthMap>>>,
}

impl Default for QuoteCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteCache {
    pub fn new() -> Self {
        QuoteCache {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached month map for `key`, asking `source` on first access.
    pub async fn get_or_fetch(&self, key: CacheKey, source: &dyn MonthFareSource) -> Arc<MonthMap> {
        // Step 1: lock and look. The lock is released before the await below.
        {
            if let Ok(entries) = self.entries.lock()
                && let Some(cached) = entries.get(&key)
            {
                log::debug!("month map cache HIT for {:?}", key);
                return Arc::clone(cached);
            }
        }

        // Step 2: miss — ask the source, then insert under the lock.
        log::info!(
            "month map cache MISS {}→{} {:04}-{:02} ({}) — querying {}",
            key.origin,
            key.dest,
            key.year,
            key.month,
            key.currency,
            source.signature()
        );
        let fetched = Arc::new(
            source
                .cheapest_per_day(&key.origin, &key.dest, key.year, key.month, &key.currency)
                .await,
        );
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key, Arc::clone(&fetched));
        }
        fetched
    }
}
