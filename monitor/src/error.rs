use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("quote client setup failed: {0}")]
    QuoteClient(#[from] market::StooqError),

    #[error("notifier setup failed: {0}")]
    NotifierClient(#[from] crate::notify::TelegramError),

    #[error("listener failed: {0}")]
    Listener(#[from] std::io::Error),
}
