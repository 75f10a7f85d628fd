use std::collections::HashMap;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::debug;

use crate::pulse::{PriceInput, Pulse, TrendConfig, TrendPulse, TrendPulseResult};
use crate::types::PriceSample;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistoryError {
    #[error("price {price} for {symbol} is not a positive finite number")]
    InvalidPrice { symbol: String, price: f64 },
}

/// Per-symbol price history with trend evaluation.
///
/// Windows are created on first observation and only ever shrink through
/// eviction. Nothing is persisted.
pub struct PriceHistory {
    cfg: TrendConfig,
    pulses: Mutex<HashMap<String, TrendPulse>>,
}

impl Default for PriceHistory {
    fn default() -> Self {
        Self::new(TrendConfig::default())
    }
}

impl PriceHistory {
    pub fn new(cfg: TrendConfig) -> Self {
        Self {
            cfg,
            pulses: Mutex::new(HashMap::new()),
        }
    }

    /// Appends a sample for `symbol`, evicts stale ones and classifies the
    /// latest move.
    ///
    /// Non-positive or non-finite prices are rejected before they reach the
    /// window, so a stored reference price can never be zero.
    pub fn record(
        &self,
        symbol: &str,
        ts_ms: u64,
        price: f64,
    ) -> Result<TrendPulseResult, HistoryError> {
        if !(price.is_finite() && price > 0.0) {
            return Err(HistoryError::InvalidPrice {
                symbol: symbol.to_string(),
                price,
            });
        }

        let mut guard = self.pulses.lock();
        let pulse = guard
            .entry(symbol.to_string())
            .or_insert_with(|| TrendPulse::new(self.cfg));

        let result = pulse.evaluate(PriceInput { ts_ms, price });

        debug!(
            symbol,
            price,
            samples = result.samples,
            trend = %result.trend,
            "price recorded"
        );

        Ok(result)
    }

    /// Retained samples for `symbol`, oldest first.
    pub fn samples(&self, symbol: &str) -> Vec<PriceSample> {
        self.pulses
            .lock()
            .get(symbol)
            .map(|p| p.window().iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn len(&self, symbol: &str) -> usize {
        self.pulses
            .lock()
            .get(symbol)
            .map_or(0, |p| p.window().len())
    }

    /// Number of symbols with a window.
    pub fn tracked(&self) -> usize {
        self.pulses.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Trend;

    const MIN: u64 = 60_000;

    #[test]
    fn first_observation_creates_window() {
        let h = PriceHistory::default();
        let r = h.record("CDR", 0, 120.0).unwrap();

        assert_eq!(r.trend, Trend::NoData);
        assert_eq!(h.len("CDR"), 1);
        assert_eq!(h.tracked(), 1);
    }

    #[test]
    fn symbols_do_not_share_windows() {
        let h = PriceHistory::default();
        h.record("CDR", 0, 100.0).unwrap();
        let r = h.record("PKN", MIN, 200.0).unwrap();

        assert_eq!(r.trend, Trend::NoData);
        assert_eq!(h.len("CDR"), 1);
        assert_eq!(h.len("PKN"), 1);
    }

    #[test]
    fn zero_price_is_rejected() {
        let h = PriceHistory::default();
        let err = h.record("PGE", 0, 0.0).unwrap_err();

        assert!(matches!(err, HistoryError::InvalidPrice { .. }));
        assert_eq!(h.len("PGE"), 0);
    }

    #[test]
    fn nan_and_negative_prices_are_rejected() {
        let h = PriceHistory::default();
        assert!(h.record("PGE", 0, f64::NAN).is_err());
        assert!(h.record("PGE", 0, -1.0).is_err());
        assert!(h.record("PGE", 0, f64::INFINITY).is_err());
        assert_eq!(h.tracked(), 0);
    }

    #[test]
    fn unknown_symbol_has_no_samples() {
        let h = PriceHistory::default();
        assert!(h.samples("XYZ").is_empty());
        assert_eq!(h.len("XYZ"), 0);
    }
}
