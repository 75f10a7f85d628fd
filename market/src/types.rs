use serde::Serialize;

/// A listed instrument: exchange ticker plus display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Listing {
    pub symbol: &'static str,
    pub name: &'static str,
}

impl Listing {
    pub const fn new(symbol: &'static str, name: &'static str) -> Self {
        Self { symbol, name }
    }
}

/// Watched instruments, in processing order.
pub const WATCHLIST: &[Listing] = &[
    Listing::new("CDR", "CDPROJEKT"),
    Listing::new("PKN", "PKNORLEN"),
    Listing::new("PEO", "PEKAO"),
    Listing::new("PGE", "PGE"),
    Listing::new("PKO", "PKOBP"),
];

/// Quote currency of every listing above.
pub const CURRENCY: &str = "PLN";

/// One observed closing price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSample {
    /// Observation time (ms since epoch)
    pub ts_ms: u64,
    pub price: f64,
}

/// Short-window trend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    NoData,
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Only directional trends are worth an alert.
    pub fn is_directional(self) -> bool {
        matches!(self, Trend::Up | Trend::Down)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Trend::NoData => "NO_DATA",
            Trend::Up => "UP",
            Trend::Down => "DOWN",
            Trend::Flat => "FLAT",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watchlist_keeps_declared_order() {
        let symbols: Vec<_> = WATCHLIST.iter().map(|l| l.symbol).collect();
        assert_eq!(symbols, vec!["CDR", "PKN", "PEO", "PGE", "PKO"]);
    }

    #[test]
    fn only_up_and_down_are_directional() {
        assert!(Trend::Up.is_directional());
        assert!(Trend::Down.is_directional());
        assert!(!Trend::Flat.is_directional());
        assert!(!Trend::NoData.is_directional());
    }

    #[test]
    fn trend_serializes_as_upper_snake() {
        let s = serde_json::to_string(&Trend::NoData).unwrap();
        assert_eq!(s, "\"NO_DATA\"");
        assert_eq!(Trend::Down.to_string(), "DOWN");
    }
}
