use serde::Deserialize;
use serde_json::Value;

use crate::stooq::errors::StooqError;

#[derive(Debug, Deserialize)]
pub struct QuoteEnvelope {
    #[serde(default)]
    pub symbols: Vec<QuoteRecord>,
}

/// One row of the `sd2t2ohlc` layout. Stooq sends numbers for listed
/// symbols and `"N/D"` strings when it has nothing.
#[derive(Debug, Deserialize)]
pub struct QuoteRecord {
    #[serde(default)]
    pub close: Option<Value>,
}

impl QuoteRecord {
    /// Close price as a positive finite number.
    pub fn close_price(&self) -> Result<f64, StooqError> {
        let raw = self
            .close
            .as_ref()
            .ok_or_else(|| StooqError::InvalidClose("missing".to_string()))?;

        let close = match raw {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        match close {
            Some(c) if c.is_finite() && c > 0.0 => Ok(c),
            _ => Err(StooqError::InvalidClose(raw.to_string())),
        }
    }
}

/// Extracts the first record's close from a raw response body.
pub fn parse_close(body: &str) -> Result<f64, StooqError> {
    let envelope: QuoteEnvelope = serde_json::from_str(body)?;
    let first = envelope.symbols.first().ok_or(StooqError::EmptyResult)?;
    first.close_price()
}
