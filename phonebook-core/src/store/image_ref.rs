// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Profile image references
//!
//! Before a contact is saved its image reference is turned into something
//! the service can store: blank values get a placeholder, remote URLs pass
//! through, device-local references are uploaded first.

use tracing::debug;

use crate::remote::RemoteResult;
use crate::repository::ContactsRepository;

/// Placeholder used when a contact has no image.
pub const DEFAULT_PROFILE_IMAGE_URL: &str = "https://picsum.photos/200";

const REMOTE_PREFIXES: [&str; 2] = ["http://", "https://"];
const LOCAL_PREFIXES: [&str; 2] = ["content://", "file://"];

/// Classification of a raw image reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageReference<'a> {
    /// Blank or the literal "null"
    Default,
    /// Already hosted (`http://`, `https://`)
    Remote(&'a str),
    /// Device-local (`content://`, `file://`), must be uploaded
    Local(&'a str),
    /// Anything else, stored as given
    Opaque(&'a str),
}

impl<'a> ImageReference<'a> {
    /// Classifies `raw` after trimming surrounding whitespace.
    pub fn classify(raw: &'a str) -> Self {
        let value = raw.trim();
        if value.is_empty() || value == "null" {
            ImageReference::Default
        } else if REMOTE_PREFIXES.iter().any(|p| value.starts_with(p)) {
            ImageReference::Remote(value)
        } else if LOCAL_PREFIXES.iter().any(|p| value.starts_with(p)) {
            ImageReference::Local(value)
        } else {
            ImageReference::Opaque(value)
        }
    }

    /// True if resolving this reference requires an upload.
    pub fn needs_upload(&self) -> bool {
        matches!(self, ImageReference::Local(_))
    }
}

/// Resolves `raw` into the URL to store with the contact.
///
/// Local references are uploaded through `repository`; an upload failure
/// is returned as-is so the caller can abort the save.
pub async fn resolve_profile_image<R>(repository: &R, raw: &str) -> RemoteResult<String>
where
    R: ContactsRepository + ?Sized,
{
    match ImageReference::classify(raw) {
        ImageReference::Default => Ok(DEFAULT_PROFILE_IMAGE_URL.to_string()),
        ImageReference::Remote(url) | ImageReference::Opaque(url) => Ok(url.to_string()),
        ImageReference::Local(reference) => {
            debug!(reference, "uploading local profile image");
            repository.upload_image(reference).await
        }
    }
}
