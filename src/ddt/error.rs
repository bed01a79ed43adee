use thiserror::Error;

#[derive(Error, Debug)]
pub enum DdtError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Input(String),

    #[error("invalid duration {0:?} (valid units: ns, us/µs, ms, s, m, h)")]
    Duration(String),

    #[error("API error (status {status}), response: {body}")]
    Api { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DdtError>;
