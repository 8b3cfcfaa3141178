//! Error types.

use thiserror::Error;

/// Message shown for a 401 response without a server-provided message.
pub const MSG_UNAUTHORIZED: &str = "unauthorized, please re-authenticate";
/// Message shown for a 403 response without a server-provided message.
pub const MSG_FORBIDDEN: &str = "forbidden";
/// Message shown for a 404 response without a server-provided message.
pub const MSG_NOT_FOUND: &str = "not found";
/// Message shown for a 500 response without a server-provided message.
pub const MSG_SERVER_ERROR: &str = "server error";

/// The main error type for rHub operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No response was received (connect failure, timeout, broken body).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered 401. The session has been logged out.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Server answered 403.
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Server answered 404.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Server answered 500.
    #[error("Server error: {message}")]
    Server { message: String },

    /// Server answered with any other non-2xx status.
    #[error("API error [{status}]: {message}")]
    Application { status: u16, message: String },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Persistent credential storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A required field was missing in the response.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Invalid argument passed to an API method.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No route in the route table matches the path.
    #[error("No route matches '{0}'")]
    RouteNotFound(String),
}

impl Error {
    /// Build the error for a failed HTTP response.
    ///
    /// `body_message` wins over the status lookup; the status lookup wins
    /// over the generic text.
    pub fn from_status(status: u16, body_message: Option<String>) -> Self {
        let pick = |fallback: &str| body_message.clone().unwrap_or_else(|| fallback.to_owned());
        match status {
            401 => Error::Unauthorized {
                message: pick(MSG_UNAUTHORIZED),
            },
            403 => Error::Forbidden {
                message: pick(MSG_FORBIDDEN),
            },
            404 => Error::NotFound {
                message: pick(MSG_NOT_FOUND),
            },
            500 => Error::Server {
                message: pick(MSG_SERVER_ERROR),
            },
            _ => Error::Application {
                status,
                message: pick(&format!("request failed with status code {}", status)),
            },
        }
    }

    /// Create a storage error.
    pub fn storage(msg: impl Into<String>) -> Self {
        Error::Storage(msg.into())
    }

    /// Create a missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Error::MissingField(field.into())
    }

    /// Human-readable message, as shown to the user.
    pub fn message(&self) -> String {
        match self {
            Error::Unauthorized { message }
            | Error::Forbidden { message }
            | Error::NotFound { message }
            | Error::Server { message }
            | Error::Application { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Unauthorized { .. } => Some(401),
            Error::Forbidden { .. } => Some(403),
            Error::NotFound { .. } => Some(404),
            Error::Server { .. } => Some(500),
            Error::Application { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is potentially retryable.
    ///
    /// The client never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Unauthorized { .. })
    }
}

/// Result type alias for rHub operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lookup() {
        assert_eq!(Error::from_status(401, None).message(), MSG_UNAUTHORIZED);
        assert_eq!(Error::from_status(403, None).message(), MSG_FORBIDDEN);
        assert_eq!(Error::from_status(404, None).message(), MSG_NOT_FOUND);
        assert_eq!(Error::from_status(500, None).message(), MSG_SERVER_ERROR);
    }

    #[test]
    fn test_body_message_wins() {
        let e = Error::from_status(401, Some("token expired".into()));
        assert!(e.is_auth_error());
        assert_eq!(e.message(), "token expired");

        let e = Error::from_status(500, Some("stock exhausted".into()));
        assert_eq!(e.message(), "stock exhausted");
    }

    #[test]
    fn test_generic_fallback() {
        let e = Error::from_status(418, None);
        assert_eq!(e.status(), Some(418));
        assert_eq!(e.message(), "request failed with status code 418");
        assert_eq!(format!("{}", e), "API error [418]: request failed with status code 418");
    }

    #[test]
    fn test_retryable() {
        assert!(!Error::from_status(500, None).is_retryable());
        assert!(!Error::missing("token").is_retryable());
    }
}
