//! Error types for Tensor API operations.
//!
//! Every call ends in success or in exactly one of the failures defined here.
//! [`ValidationError`] and [`EncodingError`] are raised locally before any
//! network I/O; [`NetworkFailure`] means the HTTP exchange never produced a
//! status line (or was aborted mid-body); [`ApplicationFailure`] means the
//! service answered with a status of 400 or above.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for Tensor operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Request record failed its validation rules
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request record could not be turned into query parameters
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// HTTP exchange failed before a status line was received
    #[error(transparent)]
    Network(#[from] NetworkFailure),

    /// Service answered with a status of 400 or above
    #[error(transparent)]
    Application(#[from] ApplicationFailure),

    /// Client configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Response body could not be decoded into the requested shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Specialized result type for Tensor operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Encoding(_) => "ENCODING_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Application(_) => "API_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
        }
    }

    /// HTTP status code carried by an [`ApplicationFailure`], if any.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Application(failure) => Some(failure.status),
            _ => None,
        }
    }

    /// Returns true if the error was raised before any network I/O.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Encoding(_) | Self::ConfigError(_)
        )
    }

    /// Returns true if the call was aborted through its cancel token.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Network(failure) if failure.is_cancelled())
    }
}

/// A request field violated one of its type's validation rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation error for field '{field}': {message}")]
pub struct ValidationError {
    /// Wire name of the offending field
    pub field: String,
    /// Message of the first failing rule
    pub message: String,
}

impl ValidationError {
    /// Create a validation error for `field`.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A request record did not match the shapes the query encoder supports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to build query parameters: {}", describe_encoding(.field.as_deref(), .message))]
pub struct EncodingError {
    /// Wire name of the field being encoded, when known
    pub field: Option<String>,
    /// What was wrong with the value
    pub message: String,
}

impl EncodingError {
    /// Create an encoding error that is not tied to a field.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }

    /// Attach the field name unless one is already recorded.
    #[must_use]
    pub fn in_field(mut self, field: &str) -> Self {
        if self.field.is_none() {
            self.field = Some(field.to_string());
        }
        self
    }
}

impl serde::ser::Error for EncodingError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self::new(msg.to_string())
    }
}

fn describe_encoding(field: Option<&str>, message: &str) -> String {
    match field {
        Some(field) => format!("error converting field {field}: {message}"),
        None => message.to_string(),
    }
}

/// Root cause of a [`NetworkFailure`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkCause {
    /// The caller's cancel token fired
    #[error("context canceled")]
    Cancelled,

    /// The caller's deadline passed
    #[error("context deadline exceeded")]
    DeadlineExceeded,

    /// The configured transport timeout elapsed
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The connection could not be established
    #[error("connection failed: {0}")]
    Connect(String),

    /// The request could not be built
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Any other transport-level failure
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for NetworkCause {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// The HTTP exchange did not complete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("network error during {operation}: {cause}")]
pub struct NetworkFailure {
    /// Transport step that failed (`create_request`, `http_request`, `read_body`)
    pub operation: String,
    /// Why it failed
    #[source]
    pub cause: NetworkCause,
}

impl NetworkFailure {
    /// Create a network failure for `operation`.
    #[must_use]
    pub fn new(operation: impl Into<String>, cause: NetworkCause) -> Self {
        Self {
            operation: operation.into(),
            cause,
        }
    }

    /// Returns true if the exchange was aborted by a cancel token.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self.cause, NetworkCause::Cancelled)
    }

    /// Returns true if a deadline or the transport timeout ended the exchange.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(
            self.cause,
            NetworkCause::DeadlineExceeded | NetworkCause::Timeout(_)
        )
    }
}

/// The service answered with a status of 400 or above.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("API error {status}: {message}{}", details_suffix(.details))]
pub struct ApplicationFailure {
    /// HTTP status code
    pub status: u16,
    /// Message from the body, or the default phrase for the status
    pub message: String,
    /// Extra detail from the body; empty when the body had none
    pub details: String,
}

fn details_suffix(details: &str) -> String {
    if details.is_empty() {
        String::new()
    } else {
        format!(" ({details})")
    }
}

impl ApplicationFailure {
    /// Classify an error response.
    ///
    /// The body is read as a JSON object: `message` wins over `error`, and a
    /// `details` value is carried through. Bodies that are not JSON objects
    /// fall back to [`default_message`] without failing.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let mut message = String::new();
        let mut details = String::new();

        if let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(body) {
            message = text_field(fields.get("message"))
                .or_else(|| text_field(fields.get("error")))
                .unwrap_or_default();
            details = match fields.get("details") {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(text)) => text.clone(),
                Some(other) => other.to_string(),
            };
        }

        if message.is_empty() {
            message = default_message(status).to_string();
        }

        Self {
            status,
            message,
            details,
        }
    }
}

fn text_field(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

/// Fixed phrase used when an error body carries no message.
#[must_use]
pub fn default_message(status: u16) -> &'static str {
    match status {
        400 => "bad request",
        401 => "unauthorized",
        422 => "validation error",
        429 => "rate limit exceeded",
        500 => "internal server error",
        other => StatusCode::from_u16(other)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or(""),
    }
}

// Conversions from external error types
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::ConfigError(format!("Invalid base URL: {err}"))
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(err.to_string())
    }
}
