//! API Errors

/// Result alias for API client calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced by the API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, CORS, ...)
    Network(String),
    /// Non-2xx status other than 404
    Status(u16),
    /// 404 for the given resource
    NotFound(String),
    /// Response body was not the expected JSON
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(code) => write!(f, "Request failed with status code {}", code),
            ApiError::NotFound(what) => write!(f, "Not found: {}", what),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
