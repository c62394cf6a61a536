// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contacts Repository
//!
//! Domain-level access to the contacts service. Each call maps to exactly
//! one request; validation and image-reference resolution happen in the
//! caller.

use std::sync::Arc;

use async_trait::async_trait;

use crate::contact::{Contact, ContactFields};
use crate::remote::dto::{CreateUserRequest, UpdateUserRequest};
use crate::remote::{
    ContactsApi, FileImageSource, ImageSource, RemoteError, RemoteResult, ServiceConfig,
};

/// Source of truth for contacts.
///
/// Implementations are stateless and may be shared across tasks.
#[async_trait]
pub trait ContactsRepository: Send + Sync {
    /// Fetches the complete contact list, in service order.
    async fn fetch_all(&self) -> RemoteResult<Vec<Contact>>;

    /// Creates a contact with an already-resolved image URL.
    async fn create(&self, fields: &ContactFields, profile_image_url: &str) -> RemoteResult<()>;

    /// Updates a contact. `None` leaves the stored image unchanged.
    async fn update(
        &self,
        id: &str,
        fields: &ContactFields,
        profile_image_url: Option<&str>,
    ) -> RemoteResult<()>;

    /// Deletes a contact.
    async fn delete(&self, id: &str) -> RemoteResult<()>;

    /// Uploads a local image and returns the hosted URL.
    async fn upload_image(&self, local_reference: &str) -> RemoteResult<String>;
}

#[async_trait]
impl<R: ContactsRepository + ?Sized> ContactsRepository for Arc<R> {
    async fn fetch_all(&self) -> RemoteResult<Vec<Contact>> {
        (**self).fetch_all().await
    }

    async fn create(&self, fields: &ContactFields, profile_image_url: &str) -> RemoteResult<()> {
        (**self).create(fields, profile_image_url).await
    }

    async fn update(
        &self,
        id: &str,
        fields: &ContactFields,
        profile_image_url: Option<&str>,
    ) -> RemoteResult<()> {
        (**self).update(id, fields, profile_image_url).await
    }

    async fn delete(&self, id: &str) -> RemoteResult<()> {
        (**self).delete(id).await
    }

    async fn upload_image(&self, local_reference: &str) -> RemoteResult<String> {
        (**self).upload_image(local_reference).await
    }
}

/// Repository backed by the contacts REST service.
pub struct RemoteContactsRepository {
    api: ContactsApi,
    images: Arc<dyn ImageSource>,
}

impl RemoteContactsRepository {
    /// Creates a repository reading local images from the filesystem.
    pub fn new(api: ContactsApi) -> Self {
        Self::with_image_source(api, Arc::new(FileImageSource))
    }

    /// Creates a repository with a platform image reader.
    pub fn with_image_source(api: ContactsApi, images: Arc<dyn ImageSource>) -> Self {
        RemoteContactsRepository { api, images }
    }

    /// Builds the HTTP client from config and wraps it.
    pub fn from_config(config: &ServiceConfig) -> RemoteResult<Self> {
        Ok(Self::new(ContactsApi::new(config)?))
    }

    pub fn api(&self) -> &ContactsApi {
        &self.api
    }
}

#[async_trait]
impl ContactsRepository for RemoteContactsRepository {
    async fn fetch_all(&self) -> RemoteResult<Vec<Contact>> {
        let users = self.api.get_all().await?;
        Ok(users.into_iter().map(Contact::from).collect())
    }

    async fn create(&self, fields: &ContactFields, profile_image_url: &str) -> RemoteResult<()> {
        self.api
            .create_user(&CreateUserRequest::new(fields, profile_image_url))
            .await
    }

    async fn update(
        &self,
        id: &str,
        fields: &ContactFields,
        profile_image_url: Option<&str>,
    ) -> RemoteResult<()> {
        self.api
            .update_user(id, &UpdateUserRequest::new(fields, profile_image_url))
            .await
    }

    async fn delete(&self, id: &str) -> RemoteResult<()> {
        self.api.delete_user(id).await
    }

    async fn upload_image(&self, local_reference: &str) -> RemoteResult<String> {
        // Readers touch the filesystem or call into the platform.
        let images = Arc::clone(&self.images);
        let reference = local_reference.to_string();
        let image = tokio::task::spawn_blocking(move || images.read(&reference))
            .await
            .map_err(|e| RemoteError::LocalImage {
                reference: local_reference.to_string(),
                reason: e.to_string(),
            })??;
        self.api.upload_image(image).await
    }
}
