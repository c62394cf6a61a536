// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Store
//!
//! Holds the full contact list, the current search query and the
//! grouped projection derived from both.
//!
//! # Overview
//!
//! Intents (load, query change, create, update, delete) are applied one at
//! a time. Every mutation is followed by a full reload; nothing is
//! inserted optimistically. Each completed transition is published to
//! registered [`EventHandler`]s as a [`StoreEvent::StateChanged`] snapshot.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use phonebook_core::{ContactStore, ContactsIntent, MockRepository};
//!
//! let mut store = ContactStore::new(Arc::new(MockRepository::new()));
//! store.dispatch(ContactsIntent::Load).await?;
//! store.dispatch(ContactsIntent::QueryChanged("ann".into())).await?;
//!
//! for (letter, contacts) in store.state().grouped.iter() {
//!     println!("{}: {}", letter, contacts.len());
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`state`] - snapshot and grouped projection types
//! - [`projection`] - filtering, sorting and grouping
//! - [`image_ref`] - profile image reference resolution
//! - [`events`] - observer interface
//! - [`contact_store`] - the store itself
//! - [`worker`] - store running on its own task

pub mod contact_store;
pub mod error;
pub mod events;
pub mod image_ref;
pub mod projection;
pub mod state;
pub mod worker;

pub use contact_store::{ContactStore, ContactsIntent, LoadTicket};
pub use error::{StoreError, StoreResult};
pub use events::{EventDispatcher, EventHandler, StoreEvent};
pub use image_ref::{resolve_profile_image, ImageReference, DEFAULT_PROFILE_IMAGE_URL};
pub use projection::{group_key, matches_query, project, FALLBACK_GROUP_KEY};
pub use state::{ContactGroups, ContactsState};
pub use worker::StoreHandle;
