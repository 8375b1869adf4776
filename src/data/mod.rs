pub mod quote_cache;
pub mod ryanair;
pub mod source;

#[cfg(test)]
pub mod stub_source;

pub use quote_cache::{CacheKey, QuoteCache};
pub use ryanair::RyanairSource;
pub use source::MonthFareSource;
