//! Error types for the TextNext search client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for every fallible search-client operation.
///
/// Request-level variants (`Transport`, `Parse`, `Schema`) abort a single
/// in-flight request and never touch the committed result set.
/// `ClientValidation` is raised before any request is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchError {
    /// The caller asked for something that cannot be sent (missing query, zero limit, ...)
    #[error("Client validation error: {0}")]
    ClientValidation(String),

    /// Network failure or a non-200 HTTP status
    #[error("Transport error{}: {message}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// Response body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Parsed response was not an array of records
    #[error("Schema error: {0}")]
    Schema(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SearchError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a ClientValidation error
    pub fn client_validation(message: impl Into<String>) -> Self {
        Self::ClientValidation(message.into())
    }

    /// Creates a Transport error for a failure below HTTP (connect, DNS, reset)
    pub fn network(message: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            message: message.into(),
        }
    }

    /// Creates a Transport error for a non-200 response
    pub fn http_status(status: u16) -> Self {
        Self::Transport {
            status: Some(status),
            message: format!("server responded with status {status}"),
        }
    }

    /// Creates a Schema error
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a ClientValidation error
    pub fn is_client_validation(&self) -> bool {
        matches!(self, Self::ClientValidation(_))
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if this is a Parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if this is a Schema error
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }

    /// Returns true for failures that happened after a request was issued.
    ///
    /// These are the errors the client reports as an "unknown server error".
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Parse(_) | Self::Schema(_)
        )
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for SearchError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// A single array element that failed the record shape check.
///
/// Never fatal: the element is dropped and the rest of the batch proceeds.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("record #{index} rejected: {reason}")]
pub struct RecordShapeError {
    /// Position of the element in the response array
    pub index: usize,
    pub reason: String,
}

impl RecordShapeError {
    pub fn new(index: usize, reason: impl Into<String>) -> Self {
        Self {
            index,
            reason: reason.into(),
        }
    }
}

/// A type alias for `Result<T, SearchError>`.
pub type Result<T> = std::result::Result<T, SearchError>;
