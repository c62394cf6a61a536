// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Phonebook Core Library
//!
//! Contact list backed by a remote REST contacts service.
//!
//! The library is split into:
//! - [`contact`] - the immutable contact record and editable fields
//! - [`remote`] - HTTP client, wire types and local image reading
//! - [`repository`] - domain-level adapter over the remote client
//! - [`store`] - the contact store: load/mutate/refetch cycle and the
//!   grouped, searchable projection used for display
//! - [`mock`] - in-memory repository for tests and demos

pub mod contact;
pub mod mock;
pub mod remote;
pub mod repository;
pub mod store;

pub use contact::{Contact, ContactFields, ValidationError};
pub use mock::{MockRepository, Operation, RepositoryCall};
pub use remote::{
    ContactsApi, FileImageSource, ImageSource, LocalImage, RemoteError, RemoteResult,
    ServiceConfig,
};
pub use repository::{ContactsRepository, RemoteContactsRepository};
pub use store::{
    resolve_profile_image, ContactGroups, ContactStore, ContactsIntent,
    ContactsState, EventDispatcher, EventHandler, ImageReference, LoadTicket, StoreError,
    StoreEvent, StoreHandle, StoreResult, DEFAULT_PROFILE_IMAGE_URL, FALLBACK_GROUP_KEY,
};
