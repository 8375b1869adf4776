use async_trait::async_trait;

use crate::domain::MonthMap;

/// Where month-scoped fare data comes from.
///
/// Implementations never fail: any transport error, non-success status or
/// unparseable payload collapses to an empty map, so "source unreachable"
/// and "no fares that month" are indistinguishable to callers. Implementations
/// log the cause so operators can still tell the difference.
#[async_trait]
pub trait MonthFareSource: Send + Sync {
    /// A unique identifier for this implementation (log lines, test doubles).
    fn signature(&self) -> &'static str;

    /// Cheapest one-way fare per day of `year`-`month` for origin→dest,
    /// quoted in `currency`. Empty map when the month has no usable fares.
    async fn cheapest_per_day(
        &self,
        origin: &str,
        dest: &str,
        year: i32,
        month: u32,
        currency: &str,
    ) -> MonthMap;
}
