use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelegramError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("telegram rejected message: status {0}")]
    Rejected(reqwest::StatusCode),
}
