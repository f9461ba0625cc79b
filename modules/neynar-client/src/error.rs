use thiserror::Error;

pub type Result<T> = std::result::Result<T, NeynarError>;

#[derive(Debug, Error)]
pub enum NeynarError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for NeynarError {
    fn from(err: reqwest::Error) -> Self {
        NeynarError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for NeynarError {
    fn from(err: serde_json::Error) -> Self {
        NeynarError::Parse(err.to_string())
    }
}
