use market::{CURRENCY, Listing, Trend};
use serde::Serialize;

/// Outcome for one symbol that produced a price this run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolReport {
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub trend: Trend,
    pub change_pct: Option<f64>,
}

/// JSON body returned by `/run-monitoring`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub status: &'static str,
    pub alerts: usize,
    pub notified: bool,
    pub results: Vec<SymbolReport>,
}

impl RunSummary {
    pub fn ok(alerts: usize, notified: bool, results: Vec<SymbolReport>) -> Self {
        Self {
            status: "OK",
            alerts,
            notified,
            results,
        }
    }
}

pub fn format_alert(listing: &Listing, price: f64, trend: Trend) -> String {
    format!(
        "🚨 {} ({}) - TREND {}\nPrice: {:.2} {}",
        listing.symbol, listing.name, trend, price, CURRENCY
    )
}

/// Folds all alert lines of a run into one message.
pub fn compose_message(alerts: &[String]) -> String {
    format!("📈 ALERTS:\n\n{}", alerts.join("\n"))
}
