use std::net::SocketAddr;
use std::time::Duration;

use market::TrendConfig;
use market::pulse::DEFAULT_THRESHOLD_PCT;
use market::stooq::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use crate::error::AppError;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_WINDOW_MINUTES: u64 = 120;
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Clone, Debug)]
pub struct AppConfig {
    // =========================
    // HTTP surface
    // =========================
    /// Listen address.
    pub bind: String,

    /// Listen port.
    pub port: u16,

    /// Emit JSON logs instead of the pretty developer format.
    pub json_logs: bool,

    // =========================
    // Quote provider
    // =========================
    /// Stooq base URL; the quote path is appended per symbol.
    pub quote_base_url: String,

    /// Bound on a single quote request.
    pub fetch_timeout: Duration,

    // =========================
    // Trend detection
    // =========================
    /// Trailing retention window for price samples.
    pub trend_window: Duration,

    /// Percent move that counts as directional.
    pub trend_threshold_pct: f64,

    // =========================
    // Notifications
    // =========================
    /// Telegram bot token. Unset or blank disables notifications.
    pub telegram_bot_token: Option<String>,

    /// Telegram chat receiving the alerts. Unset or blank disables notifications.
    pub telegram_chat_id: Option<String>,

    /// Telegram Bot API base URL.
    pub telegram_api_url: String,

    /// Bound on a single notification request.
    pub notify_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// Unparseable numbers silently fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let window_ms = get("TREND_WINDOW_MINUTES")
            .and_then(|s| s.parse::<u64>().ok())
            .and_then(|m| m.checked_mul(60_000))
            .unwrap_or(DEFAULT_WINDOW_MINUTES * 60_000);

        Self {
            bind: get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: get("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            json_logs: get("APP_ENV").as_deref() == Some("production"),

            quote_base_url: get("STOOQ_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            fetch_timeout: DEFAULT_TIMEOUT,

            trend_window: Duration::from_millis(window_ms),
            trend_threshold_pct: get("TREND_THRESHOLD_PCT")
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(DEFAULT_THRESHOLD_PCT),

            telegram_bot_token: get("TELEGRAM_BOT_TOKEN"),
            telegram_chat_id: get("TELEGRAM_CHAT_ID"),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            notify_timeout: Duration::from_secs(10),
        }
    }

    pub fn trend(&self) -> TrendConfig {
        TrendConfig {
            window_ms: u64::try_from(self.trend_window.as_millis()).unwrap_or(u64::MAX),
            threshold_pct: self.trend_threshold_pct,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        let raw = format!("{}:{}", self.bind, self.port);
        raw.parse()
            .map_err(|_| AppError::InvalidBindAddress(raw))
    }
}
