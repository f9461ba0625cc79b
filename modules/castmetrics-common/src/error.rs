use thiserror::Error;

/// Request-level failure taxonomy, shared by every endpoint.
///
/// `Validation` exists for provider records that break the canonical shape
/// (a non-positive fid); the tolerant normalizer makes it rare, but when it
/// fires it is treated as an upstream-class failure.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Neynar API key not configured")]
    ConfigMissing,

    #[error("Upstream provider error: {0}")]
    Upstream(String),

    #[error("User not found")]
    NotFound,

    #[error("Invalid provider record: {0}")]
    Validation(String),
}

impl ApiError {
    /// HTTP status the boundary layer maps this failure to.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::NotFound => 404,
            ApiError::ConfigMissing | ApiError::Upstream(_) | ApiError::Validation(_) => 500,
        }
    }
}
