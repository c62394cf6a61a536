// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mobile-friendly data types.
//!
//! UniFFI records mirroring the core store types.

use phonebook_core::{Contact, ContactFields, ContactsState, LocalImage};

/// A contact as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileContact {
    pub id: String,
    pub created_at: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub profile_image_url: Option<String>,
    /// "First Last", trimmed
    pub full_name: String,
}

impl From<&Contact> for MobileContact {
    fn from(contact: &Contact) -> Self {
        MobileContact {
            id: contact.id().to_string(),
            created_at: contact.created_at().to_string(),
            first_name: contact.first_name().to_string(),
            last_name: contact.last_name().to_string(),
            phone_number: contact.phone_number().to_string(),
            profile_image_url: contact.profile_image_url().map(str::to_string),
            full_name: contact.full_name(),
        }
    }
}

/// One section of the grouped list.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileContactGroup {
    /// Section header: a single uppercase character, or "#"
    pub key: String,
    pub contacts: Vec<MobileContact>,
}

/// Snapshot of the contact list screen.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileContactsState {
    pub is_loading: bool,
    pub query: String,
    /// Sections in display order
    pub groups: Vec<MobileContactGroup>,
    pub error: Option<String>,
}

impl From<&ContactsState> for MobileContactsState {
    fn from(state: &ContactsState) -> Self {
        let groups = state
            .grouped
            .iter()
            .map(|(key, contacts)| MobileContactGroup {
                key: key.to_string(),
                contacts: contacts.iter().map(MobileContact::from).collect(),
            })
            .collect();

        MobileContactsState {
            is_loading: state.is_loading,
            query: state.query.clone(),
            groups,
            error: state.error.clone(),
        }
    }
}

/// Editable fields of a contact form.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct MobileContactFields {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl From<MobileContactFields> for ContactFields {
    fn from(fields: MobileContactFields) -> Self {
        ContactFields::new(fields.first_name, fields.last_name, fields.phone_number)
    }
}

/// Image bytes read by the platform for upload.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileImageData {
    /// Display name of the file; may be empty
    pub file_name: String,
    /// MIME type reported by the platform, if known
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl From<MobileImageData> for LocalImage {
    fn from(data: MobileImageData) -> Self {
        let image = LocalImage::new(data.file_name, data.bytes);
        match data.mime_type {
            Some(mime) => image.with_mime_type(mime),
            None => image,
        }
    }
}
