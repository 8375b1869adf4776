pub mod candidate;
pub mod day_quote;
pub mod month_key;
pub mod route;

pub use candidate::Candidate;
pub use day_quote::{DayQuote, MonthMap};
pub use month_key::MonthKey;
pub use route::Route;
