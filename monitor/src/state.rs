use std::sync::Arc;

use chrono::{DateTime, Utc};
use market::StooqClient;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::metrics::counters::Counters;
use crate::notify::TelegramNotifier;
use crate::service::MonitorService;

/// Shared application state, passed to all route handlers via `axum::extract::State`.
pub struct AppState {
    pub service: MonitorService,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(service: MonitorService) -> Arc<Self> {
        Arc::new(Self {
            service,
            started_at: Utc::now(),
        })
    }

    /// Wires the production quote provider and notifier.
    pub fn from_config(config: &AppConfig) -> Result<Arc<Self>, AppError> {
        let quotes = StooqClient::new(config.quote_base_url.clone(), config.fetch_timeout)?;
        let notifier = TelegramNotifier::from_config(config)?;

        if !notifier.is_configured() {
            tracing::warn!("telegram credentials missing; alerts will not be delivered");
        }

        let service = MonitorService::new(
            Arc::new(quotes),
            Arc::new(notifier),
            config.trend(),
            Counters::default(),
        );

        Ok(Self::new(service))
    }
}
