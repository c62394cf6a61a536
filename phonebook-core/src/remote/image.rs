// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Local image references
//!
//! Reading a device-local image (`file://`, `content://`) into memory so
//! it can be uploaded. `file://` is handled here; other schemes need a
//! platform-provided [`ImageSource`].

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use url::Url;

use super::error::{RemoteError, RemoteResult};

/// An image read from a local reference, ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalImage {
    /// File name sent with the multipart part
    pub file_name: String,
    /// MIME type of the part
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl LocalImage {
    /// Creates an image, guessing the MIME type from the file name.
    ///
    /// An empty file name is replaced by `photo_<unix-millis>.jpg`.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mut file_name = file_name.into();
        if file_name.trim().is_empty() {
            file_name = fallback_file_name();
        }
        let mime_type = guess_mime_type(&file_name).to_string();
        LocalImage {
            file_name,
            mime_type,
            bytes,
        }
    }

    /// Overrides the guessed MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        if !mime_type.trim().is_empty() {
            self.mime_type = mime_type;
        }
        self
    }
}

/// Reads local image references.
///
/// Implement this on platforms that can resolve references the core
/// cannot open directly (Android `content://` URIs, iOS asset URLs).
pub trait ImageSource: Send + Sync {
    /// Reads the image behind `reference`.
    fn read(&self, reference: &str) -> RemoteResult<LocalImage>;
}

/// Reads `file://` references from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageSource;

impl ImageSource for FileImageSource {
    fn read(&self, reference: &str) -> RemoteResult<LocalImage> {
        let local_error = |reason: String| RemoteError::LocalImage {
            reference: reference.to_string(),
            reason,
        };

        let url = Url::parse(reference).map_err(|e| local_error(e.to_string()))?;
        if url.scheme() != "file" {
            return Err(local_error(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        let path = url
            .to_file_path()
            .map_err(|_| local_error("not a valid file path".to_string()))?;
        let bytes = fs::read(&path).map_err(|e| local_error(e.to_string()))?;

        Ok(LocalImage::new(file_name_of(&path), bytes))
    }
}

/// Guesses an image MIME type from a file name's extension.
///
/// Unknown extensions default to `image/jpeg`.
pub fn guess_mime_type(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") | Some("heif") => "image/heic",
        _ => "image/jpeg",
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(fallback_file_name)
}

fn fallback_file_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("photo_{}.jpg", millis)
}
