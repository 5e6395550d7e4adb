use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("channel page not found: {0}")]
    ChannelNotFound(String),

    #[error("invalid channel name: {0:?}")]
    InvalidChannel(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
