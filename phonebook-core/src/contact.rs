// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Module
//!
//! A phonebook entry as returned by the contacts service, and the
//! editable fields submitted when creating or updating one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A phonebook entry.
///
/// The identifier is assigned by the remote service. Contacts are never
/// modified in place; an update goes through the service and the list is
/// fetched again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    id: String,
    created_at: String,
    first_name: String,
    last_name: String,
    phone_number: String,
    profile_image_url: Option<String>,
}

impl Contact {
    /// Creates a contact record.
    pub fn new(
        id: impl Into<String>,
        created_at: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        profile_image_url: Option<String>,
    ) -> Self {
        Contact {
            id: id.into(),
            created_at: created_at.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            profile_image_url,
        }
    }

    /// Server-assigned identifier (may be empty if the service omitted it).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Creation timestamp as reported by the service.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Profile image reference, if the service returned one.
    pub fn profile_image_url(&self) -> Option<&str> {
        self.profile_image_url.as_deref()
    }

    /// Display name: `"first last"` with surrounding whitespace removed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// The editable fields of this contact.
    pub fn fields(&self) -> ContactFields {
        ContactFields::new(&self.first_name, &self.last_name, &self.phone_number)
    }
}

/// Fields submitted when creating or updating a contact.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl ContactFields {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        ContactFields {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Checks that no field is blank.
    ///
    /// The service requires all three values, so this runs before any
    /// request is made.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::Blank("first name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::Blank("last name"));
        }
        if self.phone_number.trim().is_empty() {
            return Err(ValidationError::Blank("phone number"));
        }
        Ok(())
    }
}

/// Contact field validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    Blank(&'static str),
}
