// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Phonebook Mobile Bindings
//!
//! UniFFI bindings for Android and iOS platforms.
//! The core contact store runs on a worker task of an internal runtime.
//! Mutations block the calling thread until applied; query changes and
//! reads never wait for the network. Every state transition is pushed to
//! the platform's [`ContactsObserver`].

use std::sync::Arc;

use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use phonebook_core::{
    ContactFields, ContactStore, ContactsApi, ContactsIntent, ContactsRepository, ContactsState,
    FileImageSource, ImageSource, LocalImage, RemoteContactsRepository, RemoteError, RemoteResult,
    ServiceConfig, StoreEvent, StoreHandle, DEFAULT_PROFILE_IMAGE_URL,
};

// === Modules ===

mod error;
mod types;

pub use error::MobileError;
pub use types::{
    MobileContact, MobileContactFields, MobileContactGroup, MobileContactsState, MobileImageData,
};

uniffi::setup_scaffolding!();

// === Platform Callbacks ===

/// Receives every published contact list snapshot, in order.
///
/// Called on a background thread owned by the binding. The observer may
/// call back into [`PhonebookMobile`].
#[uniffi::export(callback_interface)]
pub trait ContactsObserver: Send + Sync {
    fn on_state_changed(&self, state: MobileContactsState);
}

/// Reads device-local images (e.g. Android `content://` URIs).
#[uniffi::export(callback_interface)]
pub trait PlatformImageReader: Send + Sync {
    /// Returns the image behind `reference`, or `None` if it cannot be read.
    fn read_image(&self, reference: String) -> Option<MobileImageData>;
}

/// Image source that handles `file://` itself and asks the platform for
/// everything else.
struct PlatformImageSource {
    reader: Option<Arc<dyn PlatformImageReader>>,
}

impl ImageSource for PlatformImageSource {
    fn read(&self, reference: &str) -> RemoteResult<LocalImage> {
        if reference.starts_with("file://") {
            return FileImageSource.read(reference);
        }

        let reader = self.reader.as_ref().ok_or_else(|| RemoteError::LocalImage {
            reference: reference.to_string(),
            reason: "no platform image reader registered".to_string(),
        })?;

        reader
            .read_image(reference.to_string())
            .map(LocalImage::from)
            .ok_or_else(|| RemoteError::LocalImage {
                reference: reference.to_string(),
                reason: "platform reader returned no data".to_string(),
            })
    }
}

// === Standalone Functions ===

/// Checks a contact form. Returns the error text, or `None` if valid.
#[uniffi::export]
pub fn validate_contact_fields(fields: MobileContactFields) -> Option<String> {
    ContactFields::from(fields)
        .validate()
        .err()
        .map(|e| e.to_string())
}

/// Placeholder image URL stored for contacts without a picture.
#[uniffi::export]
pub fn default_profile_image_url() -> String {
    DEFAULT_PROFILE_IMAGE_URL.to_string()
}

// === Main Interface ===

/// Contact list backed by the remote contacts service.
#[derive(uniffi::Object)]
pub struct PhonebookMobile {
    handle: StoreHandle,
    runtime: Runtime,
}

impl PhonebookMobile {
    /// Creates an instance over any repository.
    pub fn with_repository(
        repository: Arc<dyn ContactsRepository>,
        observer: Box<dyn ContactsObserver>,
    ) -> Result<Arc<Self>, MobileError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(|e| MobileError::Internal(e.to_string()))?;

        let (states_tx, states_rx) = mpsc::unbounded_channel();
        let mut store = ContactStore::new(repository);
        store.on_event(move |event: &StoreEvent| {
            if let StoreEvent::StateChanged { state } = event {
                let _ = states_tx.send(state.clone());
            }
        });

        let handle = {
            let _guard = runtime.enter();
            StoreHandle::spawn(store)
        };
        runtime.spawn(notify_observer(states_rx, Arc::from(observer)));

        Ok(Arc::new(PhonebookMobile { handle, runtime }))
    }

    fn remote(
        base_url: String,
        api_key: Option<String>,
        observer: Box<dyn ContactsObserver>,
        reader: Option<Arc<dyn PlatformImageReader>>,
    ) -> Result<Arc<Self>, MobileError> {
        let mut config = ServiceConfig::new(base_url);
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            config = config.with_api_key(key);
        }
        debug!(base_url = %config.base_url, "creating mobile contact store");

        let api = ContactsApi::new(&config)?;
        let repository = RemoteContactsRepository::with_image_source(
            api,
            Arc::new(PlatformImageSource { reader }),
        );
        Self::with_repository(Arc::new(repository), observer)
    }

    /// Queues `intent` and blocks until the worker has applied it.
    fn apply(&self, intent: ContactsIntent) -> Result<(), MobileError> {
        self.runtime.block_on(self.handle.dispatch(intent))?;
        Ok(())
    }
}

/// Delivers snapshots to the platform one at a time, off the store's task
/// and off the async workers.
async fn notify_observer(
    mut states: mpsc::UnboundedReceiver<ContactsState>,
    observer: Arc<dyn ContactsObserver>,
) {
    while let Some(state) = states.recv().await {
        let observer = Arc::clone(&observer);
        let snapshot = MobileContactsState::from(&state);
        if let Err(e) =
            tokio::task::spawn_blocking(move || observer.on_state_changed(snapshot)).await
        {
            warn!(error = %e, "contacts observer failed");
        }
    }
}

#[uniffi::export]
impl PhonebookMobile {
    /// Connects to the contacts service. Only `file://` images can be
    /// uploaded without a platform image reader.
    #[uniffi::constructor]
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        observer: Box<dyn ContactsObserver>,
    ) -> Result<Arc<Self>, MobileError> {
        Self::remote(base_url, api_key, observer, None)
    }

    /// Connects to the contacts service, reading local images through
    /// `reader`.
    #[uniffi::constructor]
    pub fn with_image_reader(
        base_url: String,
        api_key: Option<String>,
        observer: Box<dyn ContactsObserver>,
        reader: Box<dyn PlatformImageReader>,
    ) -> Result<Arc<Self>, MobileError> {
        Self::remote(base_url, api_key, observer, Some(Arc::from(reader)))
    }

    /// Fetches the contact list.
    pub fn load(&self) -> Result<(), MobileError> {
        self.apply(ContactsIntent::Load)
    }

    /// Changes the search text. Returns without waiting; the new grouping
    /// arrives through the observer once earlier requests have finished.
    pub fn set_query(&self, query: String) -> Result<(), MobileError> {
        self.handle.send(ContactsIntent::QueryChanged(query))?;
        Ok(())
    }

    /// Creates a contact and reloads the list.
    ///
    /// `profile_image` may be blank, a hosted URL, or a local reference to
    /// upload first.
    pub fn create_contact(
        &self,
        fields: MobileContactFields,
        profile_image: String,
    ) -> Result<(), MobileError> {
        self.apply(ContactsIntent::CreateContact {
            fields: ContactFields::from(fields),
            profile_image,
        })
    }

    /// Updates a contact and reloads the list. `None` keeps the image.
    pub fn update_contact(
        &self,
        id: String,
        fields: MobileContactFields,
        profile_image: Option<String>,
    ) -> Result<(), MobileError> {
        self.apply(ContactsIntent::UpdateContact {
            id,
            fields: ContactFields::from(fields),
            profile_image,
        })
    }

    /// Deletes a contact and reloads the list.
    pub fn delete_contact(&self, id: String) -> Result<(), MobileError> {
        self.apply(ContactsIntent::DeleteContact { id })
    }

    /// Latest published snapshot.
    pub fn current_state(&self) -> MobileContactsState {
        MobileContactsState::from(&self.handle.snapshot())
    }

    /// Looks up a contact from the last successful load.
    pub fn get_contact(&self, id: String) -> Option<MobileContact> {
        self.handle.contact(&id).as_ref().map(MobileContact::from)
    }
}
