use thiserror::Error;

#[derive(Error, Debug)]
pub enum StooqError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed quote payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no quote records in response")]
    EmptyResult,

    #[error("unusable close value: {0}")]
    InvalidClose(String),
}
