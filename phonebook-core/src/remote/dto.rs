// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wire types for the contacts service.
//!
//! Every field the service may omit is optional here. Conversion into
//! [`Contact`] is the only place where missing values get defaults.

use serde::{Deserialize, Serialize};

use crate::contact::{Contact, ContactFields};

/// Response envelope shared by the service's JSON endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: Option<bool>,
    pub messages: Option<Vec<String>>,
    pub data: Option<T>,
    pub status: Option<i32>,
}

impl<T> ApiResponse<T> {
    /// True unless the service explicitly reported `success: false`.
    pub fn is_success(&self) -> bool {
        self.success != Some(false)
    }

    /// Messages sent by the service (empty if none).
    pub fn messages(&self) -> &[String] {
        self.messages.as_deref().unwrap_or(&[])
    }
}

/// Payload of the list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersData {
    #[serde(default)]
    pub users: Vec<UserDto>,
}

/// A user record as sent by the service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Option<String>,
    pub created_at: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub profile_image_url: Option<String>,
}

impl From<UserDto> for Contact {
    fn from(dto: UserDto) -> Self {
        Contact::new(
            dto.id.unwrap_or_default(),
            dto.created_at.unwrap_or_default(),
            dto.first_name.unwrap_or_default(),
            dto.last_name.unwrap_or_default(),
            dto.phone_number.unwrap_or_default(),
            dto.profile_image_url,
        )
    }
}

/// Body of the create endpoint. All fields are required on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub profile_image_url: String,
}

impl CreateUserRequest {
    pub fn new(fields: &ContactFields, profile_image_url: &str) -> Self {
        CreateUserRequest {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            phone_number: fields.phone_number.clone(),
            profile_image_url: profile_image_url.to_string(),
        }
    }
}

/// Body of the update endpoint. A null image keeps the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub profile_image_url: Option<String>,
}

impl UpdateUserRequest {
    pub fn new(fields: &ContactFields, profile_image_url: Option<&str>) -> Self {
        UpdateUserRequest {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            phone_number: fields.phone_number.clone(),
            profile_image_url: profile_image_url.map(str::to_string),
        }
    }
}

/// Payload of the image upload endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImageData {
    pub image_url: Option<String>,
}
