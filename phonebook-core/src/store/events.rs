// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Event System
//!
//! Callbacks for store events.

use std::sync::Arc;

use super::state::ContactsState;

/// Events emitted by the contact store.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// A transition completed; carries the new snapshot.
    StateChanged {
        /// The published snapshot.
        state: ContactsState,
    },

    /// The contact list was fetched and applied.
    ContactsLoaded {
        /// Number of contacts in the full list.
        count: usize,
    },

    /// A contact was created.
    ContactCreated,

    /// A contact was updated.
    ContactUpdated {
        /// The contact ID.
        contact_id: String,
    },

    /// A contact was deleted.
    ContactDeleted {
        /// The contact ID.
        contact_id: String,
    },

    /// An operation failed.
    OperationFailed {
        /// Error description, as stored in the snapshot.
        message: String,
    },
}

/// Receives store events.
///
/// Handlers run synchronously on the store's task, after the transition
/// that produced the event has completed. Keep them short.
pub trait EventHandler: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: &StoreEvent);
}

impl<F> EventHandler for F
where
    F: Fn(&StoreEvent) + Send + Sync,
{
    fn on_event(&self, event: &StoreEvent) {
        self(event)
    }
}

/// Handlers registered on one store, called in registration order.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    /// True when nobody is listening; lets the store skip snapshot clones.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn dispatch(&self, event: &StoreEvent) {
        for handler in &self.handlers {
            handler.on_event(event);
        }
    }
}
