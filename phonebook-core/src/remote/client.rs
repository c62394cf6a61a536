// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP client for the contacts service
//!
//! One method per endpoint. Non-success statuses and envelopes reporting
//! `success: false` become [`RemoteError::Service`] carrying the service's
//! messages.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::config::ServiceConfig;
use super::dto::{
    ApiResponse, CreateUserRequest, UpdateUserRequest, UploadImageData, UserDto, UsersData,
};
use super::error::{RemoteError, RemoteResult};
use super::image::LocalImage;

const API_KEY_HEADER: &str = "apikey";
const UPLOAD_PART_NAME: &str = "image";

/// Client for the contacts REST service.
#[derive(Debug, Clone)]
pub struct ContactsApi {
    client: Client,
    base_url: Url,
}

impl ContactsApi {
    /// Creates a client from config.
    pub fn new(config: &ServiceConfig) -> RemoteResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            RemoteError::Configuration(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::Configuration(format!(
                "base URL '{}' cannot have paths",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(key) = &config.api_key {
            let mut value = HeaderValue::from_str(key).map_err(|_| {
                RemoteError::Configuration("API key contains invalid characters".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
            debug!(
                key_len = key.len(),
                key_prefix = %key.chars().take(6).collect::<String>(),
                "API key configured"
            );
        }

        let mut builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers);

        // Only an explicitly configured proxy is used.
        builder = match &config.proxy_url {
            Some(proxy_url) => builder.proxy(reqwest::Proxy::all(proxy_url)?),
            None => builder.no_proxy(),
        };

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches every user.
    pub async fn get_all(&self) -> RemoteResult<Vec<UserDto>> {
        let url = self.endpoint(&["api", "User", "GetAll"])?;
        let body = self.execute(self.request(Method::GET, url)).await?;

        let envelope: ApiResponse<UsersData> = decode(&body)?;
        if !envelope.is_success() {
            return Err(RemoteError::from_messages(None, envelope.messages()));
        }

        Ok(envelope.data.map(|d| d.users).unwrap_or_default())
    }

    /// Creates a user.
    pub async fn create_user(&self, request: &CreateUserRequest) -> RemoteResult<()> {
        let url = self.endpoint(&["api", "User"])?;
        let body = self
            .execute(self.request(Method::POST, url).json(request))
            .await?;
        check_envelope(&body)
    }

    /// Replaces a user's fields.
    pub async fn update_user(&self, id: &str, request: &UpdateUserRequest) -> RemoteResult<()> {
        let url = self.endpoint(&["api", "User", id])?;
        let body = self
            .execute(self.request(Method::PUT, url).json(request))
            .await?;
        check_envelope(&body)
    }

    /// Deletes a user.
    pub async fn delete_user(&self, id: &str) -> RemoteResult<()> {
        let url = self.endpoint(&["api", "User", id])?;
        let body = self.execute(self.request(Method::DELETE, url)).await?;
        check_envelope(&body)
    }

    /// Uploads an image and returns its hosted URL.
    ///
    /// The URL is only returned once the service confirmed the upload.
    pub async fn upload_image(&self, image: LocalImage) -> RemoteResult<String> {
        let url = self.endpoint(&["api", "User", "UploadImage"])?;

        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.mime_type)?;
        let form = Form::new().part(UPLOAD_PART_NAME, part);

        let body = self
            .execute(self.request(Method::POST, url).multipart(form))
            .await?;
        let envelope: ApiResponse<UploadImageData> = decode(&body)?;

        if envelope.success != Some(true) {
            let messages = envelope.messages();
            if messages.is_empty() {
                return Err(RemoteError::Upload("Upload failed".to_string()));
            }
            return Err(RemoteError::Upload(messages.join(", ")));
        }

        envelope
            .data
            .and_then(|d| d.image_url)
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| RemoteError::Upload("Upload success but imageUrl missing".to_string()))
    }

    /// Builds `base_url/segment/...`, encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> RemoteResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                RemoteError::Configuration(format!("base URL '{}' cannot have paths", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "contacts service request");
        self.client.request(method, url)
    }

    /// Sends a request and returns the body of a successful response.
    async fn execute(&self, request: RequestBuilder) -> RemoteResult<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "contacts service response");

        if !status.is_success() {
            let messages = serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
                .ok()
                .and_then(|envelope| envelope.messages)
                .unwrap_or_default();
            return Err(RemoteError::from_messages(Some(status.as_u16()), &messages));
        }

        Ok(body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> RemoteResult<T> {
    serde_json::from_str(body).map_err(|e| RemoteError::Decode(e.to_string()))
}

/// Accepts any body except an envelope that reports `success: false`.
fn check_envelope(body: &str) -> RemoteResult<()> {
    if body.trim().is_empty() {
        return Ok(());
    }
    match serde_json::from_str::<ApiResponse<serde_json::Value>>(body) {
        Ok(envelope) if !envelope.is_success() => {
            Err(RemoteError::from_messages(None, envelope.messages()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> ContactsApi {
        ContactsApi::new(&ServiceConfig::new(base)).unwrap()
    }

    #[test]
    fn test_endpoint_without_trailing_slash() {
        let url = api("http://127.0.0.1:9000")
            .endpoint(&["api", "User", "GetAll"])
            .unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/api/User/GetAll");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = api("https://example.com/v1/").endpoint(&["api", "User"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/v1/api/User");
    }

    #[test]
    fn test_endpoint_encodes_id_segment() {
        let url = api("https://example.com/")
            .endpoint(&["api", "User", "a/b c"])
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/User/a%2Fb%20c");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ContactsApi::new(&ServiceConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, RemoteError::Configuration(_)));

        let err = ContactsApi::new(&ServiceConfig::new("mailto:someone@example.com")).unwrap_err();
        assert!(matches!(err, RemoteError::Configuration(_)));
    }

    #[test]
    fn test_check_envelope() {
        assert!(check_envelope("").is_ok());
        assert!(check_envelope("{}").is_ok());
        assert!(check_envelope(r#"{"id":"1","firstName":"Ann"}"#).is_ok());
        assert!(check_envelope("not json").is_ok());

        let err = check_envelope(r#"{"success":false,"messages":["User not found"]}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "User not found");
    }
}
