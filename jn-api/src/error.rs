/// Error types for backend API calls.
use thiserror::Error;

/// Failure taxonomy for one request: transport failure, non-2xx status,
/// or a response body that does not match the declared schema.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network or timeout failure while talking to the backend
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status code
    #[error("backend returned status {status} for {path}")]
    Status { status: u16, path: String },

    /// Response body did not decode into the expected shape
    #[error("failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },
}

/// Type alias for Results using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
