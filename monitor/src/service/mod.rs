//! Monitoring run orchestration.
//!
//! One run walks the watchlist in order:
//! quote → history → trend → alert line,
//! then sends at most one aggregated notification.
//!
//! Runs are serialized; a second trigger waits for the first to finish.

pub mod report;

use std::sync::Arc;
use std::time::Duration;

use market::{Listing, PriceHistory, QuoteSource, TrendConfig, WATCHLIST, time::now_ms};
use tokio::sync::Mutex;
use tracing::{Instrument, debug, info, instrument, warn};

use crate::logger::{TraceId, root_span, warn_if_slow};
use crate::metrics::counters::Counters;
use crate::notify::{Delivery, Notifier};

pub use report::{RunSummary, SymbolReport, compose_message, format_alert};

const SLOW_QUOTE: Duration = Duration::from_secs(3);

pub struct MonitorService {
    quotes: Arc<dyn QuoteSource>,
    notifier: Arc<dyn Notifier>,
    history: PriceHistory,
    watchlist: Vec<Listing>,
    counters: Counters,
    run_lock: Mutex<()>,
}

impl MonitorService {
    pub fn new(
        quotes: Arc<dyn QuoteSource>,
        notifier: Arc<dyn Notifier>,
        trend: TrendConfig,
        counters: Counters,
    ) -> Self {
        Self {
            quotes,
            notifier,
            history: PriceHistory::new(trend),
            watchlist: WATCHLIST.to_vec(),
            counters,
            run_lock: Mutex::new(()),
        }
    }

    /// Replaces the default watchlist.
    pub fn with_watchlist(mut self, watchlist: Vec<Listing>) -> Self {
        self.watchlist = watchlist;
        self
    }

    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn watchlist(&self) -> &[Listing] {
        &self.watchlist
    }

    /// Executes one full monitoring pass.
    pub async fn run_once(&self) -> RunSummary {
        let _guard = self.run_lock.lock().await;

        let trace_id = TraceId::default();
        self.run_inner()
            .instrument(root_span("run_monitoring", &trace_id))
            .await
    }

    async fn run_inner(&self) -> RunSummary {
        Counters::incr(&self.counters.runs);

        let mut results = Vec::with_capacity(self.watchlist.len());
        let mut alerts = Vec::new();

        for listing in &self.watchlist {
            let Some(report) = self.observe(listing).await else {
                continue;
            };

            if report.trend.is_directional() {
                alerts.push(format_alert(listing, report.price, report.trend));
            }
            results.push(report);
        }

        let notified = if alerts.is_empty() {
            false
        } else {
            Counters::add(&self.counters.alerts, alerts.len() as u64);
            self.deliver(&compose_message(&alerts)).await
        };

        info!(
            observed = results.len(),
            alerts = alerts.len(),
            notified,
            "monitoring run complete"
        );

        RunSummary::ok(alerts.len(), notified, results)
    }

    /// Fetches, records and classifies one symbol. `None` means the symbol
    /// is skipped this run.
    #[instrument(skip(self, listing), fields(symbol = listing.symbol))]
    async fn observe(&self, listing: &Listing) -> Option<SymbolReport> {
        let price = warn_if_slow(
            "quote_fetch",
            SLOW_QUOTE,
            self.quotes.latest_price(listing.symbol),
        )
        .await;

        let Some(price) = price else {
            Counters::incr(&self.counters.fetch_misses);
            debug!("no price sample; skipping");
            return None;
        };

        let outcome = match self.history.record(listing.symbol, now_ms(), price) {
            Ok(outcome) => outcome,
            Err(e) => {
                Counters::incr(&self.counters.fetch_misses);
                warn!(error = %e, "price rejected; skipping");
                return None;
            }
        };

        debug!(
            price,
            trend = %outcome.trend,
            change_pct = ?outcome.change_pct,
            "trend evaluated"
        );

        Some(SymbolReport {
            symbol: listing.symbol,
            name: listing.name,
            price,
            trend: outcome.trend,
            change_pct: outcome.change_pct,
        })
    }

    async fn deliver(&self, message: &str) -> bool {
        match self.notifier.send(message).await {
            Delivery::Sent => {
                Counters::incr(&self.counters.notifications_sent);
                true
            }
            Delivery::Failed => {
                Counters::incr(&self.counters.notifications_failed);
                false
            }
            Delivery::NotConfigured => false,
        }
    }
}
