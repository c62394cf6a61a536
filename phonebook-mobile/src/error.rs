// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mobile-friendly error types.

use phonebook_core::{RemoteError, StoreError};

/// Mobile-friendly error type.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MobileError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Service(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    Upload(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RemoteError> for MobileError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::Service { message, .. } => MobileError::Service(message),
            RemoteError::Network(e) => MobileError::Network(e.to_string()),
            RemoteError::Upload(message) => MobileError::Upload(message),
            e @ RemoteError::LocalImage { .. } => MobileError::Upload(e.to_string()),
            e @ RemoteError::Decode(_) => MobileError::Service(e.to_string()),
            RemoteError::Configuration(message) => MobileError::Configuration(message),
        }
    }
}

impl From<StoreError> for MobileError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(e) => MobileError::InvalidInput(e.to_string()),
            StoreError::Remote(e) => e.into(),
            e @ StoreError::WorkerStopped => MobileError::Internal(e.to_string()),
        }
    }
}
