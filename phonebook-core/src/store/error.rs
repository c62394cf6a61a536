// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Store error types.

use thiserror::Error;

use crate::contact::ValidationError;
use crate::remote::RemoteError;

/// Failure of a store operation.
///
/// The display text is what ends up in [`ContactsState::error`].
///
/// [`ContactsState::error`]: super::ContactsState::error
#[derive(Error, Debug)]
pub enum StoreError {
    /// Submitted fields were rejected before any request was made.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The repository call failed.
    #[error("{0}")]
    Remote(#[from] RemoteError),

    /// The store worker is no longer running.
    #[error("store worker stopped")]
    WorkerStopped,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
