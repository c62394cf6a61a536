// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote Contacts Service
//!
//! HTTP access to the contacts REST service.
//!
//! # Architecture
//!
//! - **Config**: base URL, API key, timeout and proxy settings
//! - **Wire types**: request/response bodies and the response envelope
//! - **Client**: one method per endpoint, errors mapped to [`RemoteError`]
//! - **Images**: reading device-local image references for upload
//!
//! # Example
//!
//! ```ignore
//! use phonebook_core::remote::{ContactsApi, ServiceConfig};
//!
//! let api = ContactsApi::new(&ServiceConfig::new("https://phonebook.example.com"))?;
//! let users = api.get_all().await?;
//! println!("{} users", users.len());
//! ```

mod client;
mod config;
pub mod dto;
mod error;
mod image;

pub use client::ContactsApi;
pub use config::ServiceConfig;
pub use error::{RemoteError, RemoteResult};
pub use image::{guess_mime_type, FileImageSource, ImageSource, LocalImage};
