// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Store
//!
//! Owns the full contact list and publishes [`ContactsState`] snapshots.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::contact::{Contact, ContactFields};
use crate::remote::RemoteResult;
use crate::repository::ContactsRepository;

use super::error::{StoreError, StoreResult};
use super::events::{EventDispatcher, EventHandler, StoreEvent};
use super::image_ref::resolve_profile_image;
use super::projection::project;
use super::state::ContactsState;

/// User intents accepted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactsIntent {
    /// Fetch the full list and rebuild the projection.
    Load,
    /// Change the search text; no request is made.
    QueryChanged(String),
    /// Create a contact. `profile_image` is a raw reference (may be blank).
    CreateContact {
        fields: ContactFields,
        profile_image: String,
    },
    /// Update a contact. `None` keeps the stored image.
    UpdateContact {
        id: String,
        fields: ContactFields,
        profile_image: Option<String>,
    },
    /// Delete a contact.
    DeleteContact { id: String },
}

/// Identifies one load request.
///
/// Only the result of the most recently started load is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// State holder for the contact list.
///
/// All transitions take `&mut self`, so a store processes one intent at a
/// time. Wrap it in a [`StoreHandle`](super::StoreHandle) to drive it from
/// a dedicated task.
pub struct ContactStore<R: ContactsRepository> {
    repository: R,
    all: Vec<Contact>,
    state: ContactsState,
    generation: u64,
    events: EventDispatcher,
}

impl<R: ContactsRepository> ContactStore<R> {
    /// Creates an empty store. Nothing is fetched until [`load`](Self::load).
    pub fn new(repository: R) -> Self {
        ContactStore {
            repository,
            all: Vec::new(),
            state: ContactsState::default(),
            generation: 0,
            events: EventDispatcher::default(),
        }
    }

    /// Registers an event handler.
    pub fn add_event_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.events.add_handler(handler);
    }

    /// Registers a closure as event handler.
    pub fn on_event<F>(&mut self, callback: F)
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        self.events.add_handler(Arc::new(callback));
    }

    /// Current snapshot.
    pub fn state(&self) -> &ContactsState {
        &self.state
    }

    /// The full, unfiltered list from the last successful load.
    pub fn contacts(&self) -> &[Contact] {
        &self.all
    }

    /// Looks up a contact in the full list.
    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.all.iter().find(|c| c.id() == id)
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Generation of the most recently started load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Applies an intent.
    ///
    /// Failures are also recorded in [`ContactsState::error`].
    pub async fn dispatch(&mut self, intent: ContactsIntent) -> StoreResult<()> {
        match intent {
            ContactsIntent::Load => self.load().await,
            ContactsIntent::QueryChanged(query) => {
                self.set_query(query);
                Ok(())
            }
            ContactsIntent::CreateContact {
                fields,
                profile_image,
            } => self.create_contact(&fields, &profile_image).await,
            ContactsIntent::UpdateContact {
                id,
                fields,
                profile_image,
            } => {
                self.update_contact(&id, &fields, profile_image.as_deref())
                    .await
            }
            ContactsIntent::DeleteContact { id } => self.delete_contact(&id).await,
        }
    }

    /// Fetches the full list and rebuilds the projection.
    ///
    /// On failure the previous list and projection are kept.
    pub async fn load(&mut self) -> StoreResult<()> {
        let ticket = self.begin_load();
        let result = self.repository.fetch_all().await;
        self.finish_load(ticket, result).map(|_| ())
    }

    /// Marks a load as started and returns its ticket.
    ///
    /// Any ticket issued earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state.is_loading = true;
        self.state.error = None;
        debug!(generation = self.generation, "load started");
        self.publish();
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Applies the outcome of the load identified by `ticket`.
    ///
    /// Returns `Ok(false)` without touching the state when a newer load
    /// has started since; `Ok(true)` when the list was replaced.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: RemoteResult<Vec<Contact>>,
    ) -> StoreResult<bool> {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding stale load result"
            );
            return Ok(false);
        }

        match result {
            Ok(contacts) => {
                let count = contacts.len();
                self.all = contacts;
                self.state.grouped = project(&self.all, &self.state.query);
                self.state.is_loading = false;
                debug!(count, groups = self.state.grouped.len(), "contacts loaded");
                self.publish();
                self.events.dispatch(&StoreEvent::ContactsLoaded { count });
                Ok(true)
            }
            Err(e) => self.fail(e.into()).map(|_| false),
        }
    }

    /// Sets the search text and rebuilds the projection from memory.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.state.grouped = project(&self.all, &self.state.query);
        self.publish();
    }

    /// Creates a contact, uploading a local image first if needed, then
    /// reloads.
    pub async fn create_contact(
        &mut self,
        fields: &ContactFields,
        profile_image: &str,
    ) -> StoreResult<()> {
        if let Err(e) = fields.validate() {
            return self.fail(e.into());
        }
        self.begin_operation();

        let result = match resolve_profile_image(&self.repository, profile_image).await {
            Ok(url) => self.repository.create(fields, &url).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            return self.fail(e.into());
        }

        self.events.dispatch(&StoreEvent::ContactCreated);
        self.load().await
    }

    /// Updates a contact, then reloads.
    ///
    /// `Some(raw)` goes through the same image resolution as create.
    pub async fn update_contact(
        &mut self,
        id: &str,
        fields: &ContactFields,
        profile_image: Option<&str>,
    ) -> StoreResult<()> {
        if let Err(e) = fields.validate() {
            return self.fail(e.into());
        }
        self.begin_operation();

        let image = match profile_image {
            Some(raw) => match resolve_profile_image(&self.repository, raw).await {
                Ok(url) => Some(url),
                Err(e) => return self.fail(e.into()),
            },
            None => None,
        };
        if let Err(e) = self.repository.update(id, fields, image.as_deref()).await {
            return self.fail(e.into());
        }

        self.events.dispatch(&StoreEvent::ContactUpdated {
            contact_id: id.to_string(),
        });
        self.load().await
    }

    /// Deletes a contact, then reloads.
    pub async fn delete_contact(&mut self, id: &str) -> StoreResult<()> {
        self.begin_operation();

        if let Err(e) = self.repository.delete(id).await {
            return self.fail(e.into());
        }

        self.events.dispatch(&StoreEvent::ContactDeleted {
            contact_id: id.to_string(),
        });
        self.load().await
    }

    fn begin_operation(&mut self) {
        self.state.is_loading = true;
        self.state.error = None;
        self.publish();
    }

    /// Records a failure in the snapshot and hands the error back.
    fn fail(&mut self, error: StoreError) -> StoreResult<()> {
        let message = error.to_string();
        warn!(error = %message, "contact store operation failed");

        self.state.is_loading = false;
        self.state.error = Some(message.clone());
        self.publish();
        self.events
            .dispatch(&StoreEvent::OperationFailed { message });

        Err(error)
    }

    fn publish(&self) {
        if self.events.is_empty() {
            return;
        }
        self.events.dispatch(&StoreEvent::StateChanged {
            state: self.state.clone(),
        });
    }
}
