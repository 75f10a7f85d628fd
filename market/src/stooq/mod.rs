pub mod client;
pub mod errors;
pub mod types;

pub use client::StooqClient;
pub use errors::StooqError;
pub use types::*;

use async_trait::async_trait;
use tracing::warn;

/// Latest-price lookup used by the monitor.
///
/// Every failure collapses into `None`; the cause is logged, not returned.
#[async_trait]
pub trait QuoteSource: Send + Sync + 'static {
    async fn latest_price(&self, symbol: &str) -> Option<f64>;
}

#[async_trait]
impl QuoteSource for StooqClient {
    async fn latest_price(&self, symbol: &str) -> Option<f64> {
        match self.fetch_close(symbol).await {
            Ok(close) => Some(close),
            Err(e) => {
                warn!(symbol, error = %e, "quote unavailable");
                None
            }
        }
    }
}
