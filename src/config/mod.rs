//! Configuration module for the roundtrip finder.

pub mod search;
pub mod source;

// Re-export commonly used items
pub use search::SEARCH;
pub use source::SOURCE;
