//! Error handling module for the FoodML client.
//!
//! Provides a single error type covering the client's failure taxonomy:
//! transport failures, authentication expiry, backend-reported errors, and
//! response decoding failures.

/// Client error type.
#[derive(Debug)]
pub enum ApiError {
    /// Network or transport failure before a response was received
    Transport(String),
    /// The backend rejected the session credential (HTTP 401)
    Unauthorized(String),
    /// The backend returned a non-2xx status with a detail message
    Backend { status: u16, detail: String },
    /// A 2xx response body could not be decoded as the expected shape
    Decode(String),
}

impl ApiError {
    /// Get the HTTP status associated with this error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport(_) => None,
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Backend { status, .. } => Some(*status),
            ApiError::Decode(_) => None,
        }
    }

    /// Get the human-readable message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::Backend { detail, .. } => detail,
            ApiError::Decode(msg) => msg,
        }
    }

    /// True if this error was caused by an authentication failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "unauthorized: {}", msg),
            ApiError::Backend { status, detail } => write!(f, "backend error ({}): {}", status, detail),
            ApiError::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            tracing::error!("Response decode error: {:?}", err);
            ApiError::Decode(err.to_string())
        } else {
            tracing::error!("Transport error: {:?}", err);
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ApiError::Decode(format!("JSON error: {}", err))
    }
}

/// Result alias used by every client operation.
pub type ApiResult<T> = Result<T, ApiError>;
