use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};

use crate::stooq::errors::StooqError;
use crate::stooq::types::parse_close;

pub const DEFAULT_BASE_URL: &str = "https://stooq.pl";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct StooqClient {
    http: Client,
    url: String,
}

impl StooqClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self, StooqError> {
        let http = Client::builder()
            .timeout(timeout)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            url: url.trim_end_matches('/').to_string(),
        })
    }

    /// Quote endpoint for `symbol` in the `sd2t2ohlc` JSON layout.
    pub fn quote_url(&self, symbol: &str) -> String {
        format!("{}/q/l/?s={}&f=sd2t2ohlc&h&e=json", self.url, symbol)
    }

    #[instrument(skip(self), fields(symbol = %symbol), level = "debug")]
    pub async fn fetch_close(&self, symbol: &str) -> Result<f64, StooqError> {
        let url = self.quote_url(symbol);

        let resp = self.http.get(&url).send().await?.error_for_status()?;
        let body = resp.text().await?;

        let close = parse_close(&body)?;

        debug!(close, "stooq quote fetched");

        Ok(close)
    }
}
