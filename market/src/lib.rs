//! Quote retrieval and short-window trend detection for a fixed watchlist.

pub mod history;
pub mod pulse;
pub mod rolling_window;
pub mod stooq;
pub mod time;
pub mod types;

pub use history::{HistoryError, PriceHistory};
pub use pulse::{TrendConfig, TrendPulseResult};
pub use stooq::{QuoteSource, StooqClient, StooqError};
pub use types::{CURRENCY, Listing, PriceSample, Trend, WATCHLIST};
