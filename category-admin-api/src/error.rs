use serde::{Deserialize, Serialize};

/// Error type for all collection API operations.
///
/// Every variant is serializable for structured error reporting. None of them
/// is retried by the client; callers log and move on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// The configured base URL is unusable.
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
        /// Why it was rejected.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out. Only possible when a timeout is configured.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The requested category does not exist (HTTP 404 or an empty body).
    NotFound {
        /// ID that was requested.
        id: String,
    },

    /// The server answered with a non-success status.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// Failed to parse the response body.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ApiError {
    /// Whether this is expected behavior (missing record, rejected input),
    /// used to pick the log level.
    ///
    /// `true` logs at `warn`, `false` at `error`.
    /// **Keep in sync when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBaseUrl { url, detail } => {
                write!(f, "Invalid base URL '{url}': {detail}")
            }
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::NotFound { id } => write!(f, "Category '{id}' not found"),
            Self::HttpStatus {
                status,
                raw_message,
            } => match raw_message.as_deref() {
                Some(msg) if !msg.is_empty() => write!(f, "HTTP {status}: {msg}"),
                _ => write!(f, "HTTP {status}"),
            },
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => {
                write!(f, "Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
