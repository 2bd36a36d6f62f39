//! API Errors
//!
//! Typed failures of the items and georef collaborators.

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Why a lookup or submission failed
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response
    Network(String),
    /// Non-success HTTP status
    Status(u16),
    /// Body did not match the expected shape
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(code) => write!(f, "HTTP status {}", code),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
