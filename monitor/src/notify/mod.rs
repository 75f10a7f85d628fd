//! Outbound alert delivery.

pub mod errors;
pub mod telegram;

pub use errors::TelegramError;
pub use telegram::TelegramNotifier;

use async_trait::async_trait;

/// Result of one delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// Credentials missing; nothing was attempted.
    NotConfigured,
    /// Attempted and failed. The cause has already been logged.
    Failed,
}

/// Sink for alert messages.
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    async fn send(&self, text: &str) -> Delivery;
}
