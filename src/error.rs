use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{url} responded with status code {status}")]
    BadStatus { url: String, status: reqwest::StatusCode },

    #[error("{url} is outside the allowed domain {domain}")]
    DisallowedDomain { url: String, domain: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
