// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Store worker
//!
//! Runs a [`ContactStore`] on its own task. Intents are queued and applied
//! strictly in arrival order; snapshots are published on a watch channel.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::contact::Contact;
use crate::repository::ContactsRepository;

use super::contact_store::{ContactStore, ContactsIntent};
use super::error::{StoreError, StoreResult};
use super::events::StoreEvent;
use super::state::ContactsState;

struct Command {
    intent: ContactsIntent,
    reply: Option<oneshot::Sender<StoreResult<()>>>,
}

/// Handle to a store running on a background task.
///
/// Dropping every handle stops the worker after the queued intents have
/// been applied.
pub struct StoreHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<ContactsState>,
    contacts: watch::Receiver<Vec<Contact>>,
    task: JoinHandle<()>,
}

impl StoreHandle {
    /// Moves `store` onto a new task. Must be called within a tokio runtime.
    pub fn spawn<R>(mut store: ContactStore<R>) -> Self
    where
        R: ContactsRepository + 'static,
    {
        let (snapshot_tx, snapshot_rx) = watch::channel(store.state().clone());
        store.on_event(move |event: &StoreEvent| {
            if let StoreEvent::StateChanged { state } = event {
                snapshot_tx.send_replace(state.clone());
            }
        });

        let (contacts_tx, contacts_rx) = watch::channel(store.contacts().to_vec());

        let (commands, mut queue) = mpsc::unbounded_channel::<Command>();
        let task = tokio::spawn(async move {
            while let Some(command) = queue.recv().await {
                let result = store.dispatch(command.intent).await;
                contacts_tx.send_if_modified(|list| {
                    if list.as_slice() == store.contacts() {
                        return false;
                    }
                    *list = store.contacts().to_vec();
                    true
                });
                if let Some(reply) = command.reply {
                    let _ = reply.send(result);
                }
            }
            debug!("store worker stopped");
        });

        StoreHandle {
            commands,
            snapshots: snapshot_rx,
            contacts: contacts_rx,
            task,
        }
    }

    /// Queues an intent without waiting for it.
    ///
    /// Outcomes are visible through [`snapshot`](Self::snapshot) and
    /// [`subscribe`](Self::subscribe).
    pub fn send(&self, intent: ContactsIntent) -> StoreResult<()> {
        self.commands
            .send(Command {
                intent,
                reply: None,
            })
            .map_err(|_| StoreError::WorkerStopped)
    }

    /// Queues an intent and waits until it has been applied.
    pub async fn dispatch(&self, intent: ContactsIntent) -> StoreResult<()> {
        let (reply, outcome) = oneshot::channel();
        self.commands
            .send(Command {
                intent,
                reply: Some(reply),
            })
            .map_err(|_| StoreError::WorkerStopped)?;
        outcome.await.map_err(|_| StoreError::WorkerStopped)?
    }

    /// Receiver for published snapshots.
    pub fn subscribe(&self) -> watch::Receiver<ContactsState> {
        self.snapshots.clone()
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> ContactsState {
        self.snapshots.borrow().clone()
    }

    /// The full list from the last successful load.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.borrow().clone()
    }

    /// Looks up a contact in the full list, ignoring the current query.
    pub fn contact(&self, id: &str) -> Option<Contact> {
        self.contacts.borrow().iter().find(|c| c.id() == id).cloned()
    }

    /// Stops accepting intents and waits for queued ones to finish.
    pub async fn shutdown(self) {
        drop(self.commands);
        if let Err(e) = self.task.await {
            debug!(error = %e, "store worker ended abnormally");
        }
    }
}
