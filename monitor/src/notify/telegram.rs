use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::config::AppConfig;
use crate::notify::{Delivery, Notifier, TelegramError};

#[derive(Debug, Clone)]
struct Credentials {
    bot_token: String,
    chat_id: String,
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

/// Telegram Bot API `sendMessage` client.
#[derive(Clone)]
pub struct TelegramNotifier {
    http: Client,
    api_url: String,
    credentials: Option<Credentials>,
}

impl TelegramNotifier {
    pub fn new(
        api_url: String,
        bot_token: Option<String>,
        chat_id: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TelegramError> {
        let http = Client::builder().timeout(timeout).build()?;

        let credentials = match (bot_token, chat_id) {
            (Some(bot_token), Some(chat_id)) => Some(Credentials { bot_token, chat_id }),
            _ => None,
        };

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self, TelegramError> {
        Self::new(
            cfg.telegram_api_url.clone(),
            cfg.telegram_bot_token.clone(),
            cfg.telegram_chat_id.clone(),
            cfg.notify_timeout,
        )
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    #[instrument(skip_all, level = "debug")]
    async fn post(&self, creds: &Credentials, text: &str) -> Result<(), TelegramError> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, creds.bot_token);
        let body = SendMessage {
            chat_id: &creds.chat_id,
            text,
            parse_mode: "HTML",
        };

        let resp = self.http.post(&url).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TelegramError::Rejected(status));
        }

        debug!(%status, "telegram accepted message");
        Ok(())
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Delivery {
        let Some(creds) = &self.credentials else {
            debug!("telegram credentials not configured; skipping notification");
            return Delivery::NotConfigured;
        };

        match self.post(creds, text).await {
            Ok(()) => {
                info!(chars = text.chars().count(), "alert notification sent");
                Delivery::Sent
            }
            Err(e) => {
                // The token is part of the URL; log only the cause.
                warn!(error = %e.without_url(), "alert notification failed");
                Delivery::Failed
            }
        }
    }
}

impl TelegramError {
    fn without_url(self) -> TelegramError {
        match self {
            TelegramError::Http(e) => TelegramError::Http(e.without_url()),
            other => other,
        }
    }
}
