// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote service error types.

use thiserror::Error;

/// Result type for remote operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Errors from the contacts service or the local side of a request.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The service rejected the request.
    ///
    /// The message is the service's own text when it sent one.
    #[error("{message}")]
    Service {
        /// HTTP status, if the failure came from a non-success status
        status: Option<u16>,
        message: String,
    },

    /// Connection, TLS, timeout or other transport failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),

    /// Image upload did not produce a usable URL.
    #[error("{0}")]
    Upload(String),

    /// Local image reference could not be read.
    #[error("cannot read local image {reference}: {reason}")]
    LocalImage { reference: String, reason: String },

    /// Invalid client configuration (bad base URL, proxy, ...).
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl RemoteError {
    /// Builds a service error from the envelope messages, falling back to
    /// `"HTTP error: <status>"` (or a generic text without a status).
    pub fn from_messages(status: Option<u16>, messages: &[String]) -> Self {
        let joined = messages
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        let message = if !joined.is_empty() {
            joined
        } else {
            match status {
                Some(code) => format!("HTTP error: {}", code),
                None => "request failed".to_string(),
            }
        };

        RemoteError::Service { status, message }
    }

    /// HTTP status associated with the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Service { status, .. } => *status,
            RemoteError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_message_is_used_verbatim() {
        let err = RemoteError::from_messages(Some(400), &["Phone number is invalid".into()]);
        assert_eq!(err.to_string(), "Phone number is invalid");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_multiple_messages_are_joined() {
        let err = RemoteError::from_messages(Some(422), &["a".into(), " ".into(), "b".into()]);
        assert_eq!(err.to_string(), "a, b");
    }

    #[test]
    fn test_default_message_uses_status() {
        let err = RemoteError::from_messages(Some(404), &[]);
        assert_eq!(err.to_string(), "HTTP error: 404");

        let err = RemoteError::from_messages(None, &[]);
        assert_eq!(err.to_string(), "request failed");
    }
}
