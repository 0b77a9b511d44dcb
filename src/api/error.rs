//! Error types for catalog API calls.
//!
//! Two kinds matter to the views: transport/HTTP failures and responses
//! that do not match the expected shape. An absent product is not an error.

use thiserror::Error;

use crate::catalog::PageInvariantError;

/// Errors returned by a [`CatalogApi`](super::CatalogApi).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connectivity, timeout or non-success HTTP status.
    #[error("{message}")]
    Network { message: String },

    /// Response body did not match the expected shape.
    #[error("{message}")]
    Decode { message: String },
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Decode,
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        ApiError::Network {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        ApiError::Decode {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network { .. } => ErrorKind::Network,
            ApiError::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// Human-readable message, or `None` when the failure carries none.
    pub fn message(&self) -> Option<&str> {
        let message = match self {
            ApiError::Network { message } | ApiError::Decode { message } => message.trim(),
        };
        if message.is_empty() {
            None
        } else {
            Some(message)
        }
    }

    /// Build an HTTP status failure, appending the server's message if any.
    pub fn http_status(status: u16, reason: Option<&str>, server_message: Option<&str>) -> Self {
        let mut message = format!("HTTP {status}");
        if let Some(reason) = reason {
            message.push(' ');
            message.push_str(reason);
        }
        if let Some(server_message) = server_message.filter(|m| !m.trim().is_empty()) {
            message.push_str(": ");
            message.push_str(server_message.trim());
        }
        ApiError::Network { message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::decode(err.to_string())
        } else {
            ApiError::network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::decode(format!("Malformed response: {err}"))
    }
}

impl From<PageInvariantError> for ApiError {
    fn from(err: PageInvariantError) -> Self {
        ApiError::decode(format!("Malformed response: {err}"))
    }
}
