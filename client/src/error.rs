use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend answered with a non-2xx status and an error detail.
    #[error("backend returned {status}: {detail}")]
    Api { status: StatusCode, detail: String },
    /// The request never produced a usable response (connect, send or
    /// decode failure).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
