// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mock Repository
//!
//! In-memory [`ContactsRepository`] for tests and offline demos.
//! Records every call and supports one-shot failure injection.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::contact::{Contact, ContactFields};
use crate::remote::{RemoteError, RemoteResult};
use crate::repository::ContactsRepository;

/// Repository operations, used to target injected failures.
/// Where uploaded images "live" unless changed with
/// [`MockRepository::set_upload_base`].
pub const DEFAULT_UPLOAD_BASE: &str = "https://images.example.com/uploads";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchAll,
    Create,
    Update,
    Delete,
    UploadImage,
}

/// A call received by the mock, with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    FetchAll,
    Create {
        fields: ContactFields,
        profile_image_url: String,
    },
    Update {
        id: String,
        fields: ContactFields,
        profile_image_url: Option<String>,
    },
    Delete {
        id: String,
    },
    UploadImage {
        local_reference: String,
    },
}

impl RepositoryCall {
    pub fn operation(&self) -> Operation {
        match self {
            RepositoryCall::FetchAll => Operation::FetchAll,
            RepositoryCall::Create { .. } => Operation::Create,
            RepositoryCall::Update { .. } => Operation::Update,
            RepositoryCall::Delete { .. } => Operation::Delete,
            RepositoryCall::UploadImage { .. } => Operation::UploadImage,
        }
    }
}

#[derive(Default)]
struct MockState {
    contacts: Vec<Contact>,
    calls: Vec<RepositoryCall>,
    failures: HashMap<Operation, VecDeque<String>>,
    next_id: u64,
    uploads: u64,
    upload_base: Option<String>,
}

/// In-memory contacts repository.
///
/// Ids are assigned as `mock-1`, `mock-2`, ... and uploads return
/// `<upload base>/<n>.jpg`, by default under [`DEFAULT_UPLOAD_BASE`].
#[derive(Default)]
pub struct MockRepository {
    state: Mutex<MockState>,
}

impl MockRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository already holding `contacts`.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let mock = Self::new();
        mock.state().contacts = contacts;
        mock
    }

    /// Makes the next call to `operation` fail with `message`.
    ///
    /// Multiple injected failures for the same operation are consumed in order.
    pub fn fail_next(&self, operation: Operation, message: impl Into<String>) {
        self.state()
            .failures
            .entry(operation)
            .or_default()
            .push_back(message.into());
    }

    /// Changes the prefix of URLs returned by uploads.
    pub fn set_upload_base(&self, base: impl Into<String>) {
        self.state().upload_base = Some(base.into());
    }

    /// Replaces the stored contacts without recording a call.
    pub fn set_contacts(&self, contacts: Vec<Contact>) {
        self.state().contacts = contacts;
    }

    /// Returns the stored contacts.
    pub fn contacts(&self) -> Vec<Contact> {
        self.state().contacts.clone()
    }

    /// Returns all recorded calls in order.
    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.state().calls.clone()
    }

    /// Returns how many times `operation` was called.
    pub fn call_count(&self, operation: Operation) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| c.operation() == operation)
            .count()
    }

    /// Clears recorded calls.
    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records the call and returns an injected failure, if any.
    fn record(&self, call: RepositoryCall) -> RemoteResult<MutexGuard<'_, MockState>> {
        let mut state = self.state();
        let operation = call.operation();
        state.calls.push(call);

        if let Some(message) = state
            .failures
            .get_mut(&operation)
            .and_then(VecDeque::pop_front)
        {
            return Err(RemoteError::Service {
                status: None,
                message,
            });
        }
        Ok(state)
    }
}

fn not_found(id: &str) -> RemoteError {
    RemoteError::Service {
        status: Some(404),
        message: format!("User {} not found", id),
    }
}

#[async_trait]
impl ContactsRepository for MockRepository {
    async fn fetch_all(&self) -> RemoteResult<Vec<Contact>> {
        let state = self.record(RepositoryCall::FetchAll)?;
        Ok(state.contacts.clone())
    }

    async fn create(&self, fields: &ContactFields, profile_image_url: &str) -> RemoteResult<()> {
        let mut state = self.record(RepositoryCall::Create {
            fields: fields.clone(),
            profile_image_url: profile_image_url.to_string(),
        })?;

        state.next_id += 1;
        let contact = Contact::new(
            format!("mock-{}", state.next_id),
            format!("2026-01-01T00:00:{:02}Z", state.next_id % 60),
            &fields.first_name,
            &fields.last_name,
            &fields.phone_number,
            Some(profile_image_url.to_string()),
        );
        state.contacts.push(contact);
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        fields: &ContactFields,
        profile_image_url: Option<&str>,
    ) -> RemoteResult<()> {
        let mut state = self.record(RepositoryCall::Update {
            id: id.to_string(),
            fields: fields.clone(),
            profile_image_url: profile_image_url.map(str::to_string),
        })?;

        let slot = state
            .contacts
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| not_found(id))?;

        let image = match profile_image_url {
            Some(url) => Some(url.to_string()),
            None => slot.profile_image_url().map(str::to_string),
        };
        *slot = Contact::new(
            id,
            slot.created_at(),
            &fields.first_name,
            &fields.last_name,
            &fields.phone_number,
            image,
        );
        Ok(())
    }

    async fn delete(&self, id: &str) -> RemoteResult<()> {
        let mut state = self.record(RepositoryCall::Delete { id: id.to_string() })?;

        let before = state.contacts.len();
        state.contacts.retain(|c| c.id() != id);
        if state.contacts.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn upload_image(&self, local_reference: &str) -> RemoteResult<String> {
        let mut state = self.record(RepositoryCall::UploadImage {
            local_reference: local_reference.to_string(),
        })?;

        state.uploads += 1;
        let base = state
            .upload_base
            .as_deref()
            .unwrap_or(DEFAULT_UPLOAD_BASE)
            .trim_end_matches('/');
        Ok(format!("{}/{}.jpg", base, state.uploads))
    }
}
