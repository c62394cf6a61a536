//! Tests for remote::client and the remote repository
//! Run against a local canned HTTP server.

mod common;

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use common::fixtures::fields;
use common::http::{CannedResponse, CannedServer};
use phonebook_core::remote::dto::{CreateUserRequest, UpdateUserRequest};
use phonebook_core::{
    ContactStore, ContactsApi, ContactsRepository, FileImageSource, ImageSource, LocalImage,
    RemoteContactsRepository, RemoteError, RemoteResult, ServiceConfig,
};

const USERS_BODY: &str = r#"{
    "success": true,
    "messages": [],
    "data": {
        "users": [
            {"id": "u1", "createdAt": "2026-01-01T10:00:00Z", "firstName": "Ann",
             "lastName": "Lee", "phoneNumber": "123", "profileImageUrl": null},
            {"id": "u2", "firstName": "bob", "lastName": "Ng", "phoneNumber": "999",
             "profileImageUrl": "https://cdn.example.com/bob.png"}
        ]
    },
    "status": 200
}"#;

fn api_for(server: &CannedServer) -> ContactsApi {
    let config = ServiceConfig::new(server.base_url()).with_api_key("secret-key");
    ContactsApi::new(&config).unwrap()
}

#[tokio::test]
async fn test_get_all_maps_users() {
    let server = CannedServer::start(vec![CannedResponse::ok(USERS_BODY)]).await;
    let repo = RemoteContactsRepository::new(api_for(&server));

    let contacts = repo.fetch_all().await.unwrap();

    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].id(), "u1");
    assert_eq!(contacts[0].full_name(), "Ann Lee");
    assert_eq!(contacts[0].profile_image_url(), None);
    assert_eq!(contacts[1].created_at(), "");
    assert_eq!(
        contacts[1].profile_image_url(),
        Some("https://cdn.example.com/bob.png")
    );

    let request = &server.requests()[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/api/User/GetAll");
    assert_eq!(request.header("apikey"), Some("secret-key"));
}

#[tokio::test]
async fn test_get_all_without_data_is_empty() {
    let server = CannedServer::start(vec![CannedResponse::ok(r#"{"success":true}"#)]).await;

    let users = api_for(&server).get_all().await.unwrap();

    assert!(users.is_empty());
}

#[tokio::test]
async fn test_error_status_uses_service_messages() {
    let server = CannedServer::start(vec![CannedResponse::json(
        400,
        r#"{"success":false,"messages":["First name is required","Phone is invalid"]}"#,
    )])
    .await;

    let err = api_for(&server).get_all().await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "First name is required, Phone is invalid");
}

#[tokio::test]
async fn test_error_status_without_messages() {
    let server = CannedServer::start(vec![CannedResponse::json(503, "gateway down")]).await;

    let err = api_for(&server).get_all().await.unwrap_err();

    assert_eq!(err.to_string(), "HTTP error: 503");
}

#[tokio::test]
async fn test_success_false_envelope_fails() {
    let server = CannedServer::start(vec![CannedResponse::ok(
        r#"{"success":false,"messages":["Quota exceeded"]}"#,
    )])
    .await;

    let err = api_for(&server).get_all().await.unwrap_err();

    assert_eq!(err.to_string(), "Quota exceeded");
}

#[tokio::test]
async fn test_malformed_list_body_is_decode_error() {
    let server = CannedServer::start(vec![CannedResponse::ok("<html>")]).await;

    let err = api_for(&server).get_all().await.unwrap_err();

    assert!(matches!(err, RemoteError::Decode(_)));
}

#[tokio::test]
async fn test_create_posts_json() {
    let server = CannedServer::start(vec![CannedResponse::ok(r#"{"success":true}"#)]).await;
    let request = CreateUserRequest::new(&fields("Ann", "Lee", "123"), "https://x/a.png");

    api_for(&server).create_user(&request).await.unwrap();

    let recorded = &server.requests()[0];
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.path, "/api/User");
    assert_eq!(
        recorded.body_json(),
        serde_json::json!({
            "firstName": "Ann",
            "lastName": "Lee",
            "phoneNumber": "123",
            "profileImageUrl": "https://x/a.png"
        })
    );
}

#[tokio::test]
async fn test_update_puts_to_id_with_null_image() {
    let server = CannedServer::start(vec![CannedResponse::ok("")]).await;
    let request = UpdateUserRequest::new(&fields("Ann", "Lee", "123"), None);

    api_for(&server).update_user("u1", &request).await.unwrap();

    let recorded = &server.requests()[0];
    assert_eq!(recorded.method, "PUT");
    assert_eq!(recorded.path, "/api/User/u1");
    assert_eq!(recorded.body_json()["profileImageUrl"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_delete_sends_delete() {
    let server = CannedServer::start(vec![CannedResponse::ok(r#"{"success":true}"#)]).await;

    api_for(&server).delete_user("u2").await.unwrap();

    let recorded = &server.requests()[0];
    assert_eq!(recorded.method, "DELETE");
    assert_eq!(recorded.path, "/api/User/u2");
}

#[tokio::test]
async fn test_delete_not_found() {
    let server = CannedServer::start(vec![CannedResponse::json(
        404,
        r#"{"success":false,"messages":["User not found"],"status":404}"#,
    )])
    .await;

    let err = api_for(&server).delete_user("nope").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "User not found");
}

#[tokio::test]
async fn test_upload_returns_image_url() {
    let server = CannedServer::start(vec![CannedResponse::ok(
        r#"{"success":true,"data":{"imageUrl":"https://cdn.example.com/u/1.png"}}"#,
    )])
    .await;
    let image = LocalImage::new("me.png", vec![0x89, b'P', b'N', b'G']);

    let url = api_for(&server).upload_image(image).await.unwrap();

    assert_eq!(url, "https://cdn.example.com/u/1.png");
    let recorded = &server.requests()[0];
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.path, "/api/User/UploadImage");
    assert!(recorded
        .header("content-type")
        .unwrap()
        .starts_with("multipart/form-data"));
    let body = recorded.body_text();
    assert!(body.contains(r#"name="image""#));
    assert!(body.contains(r#"filename="me.png""#));
    assert!(body.contains("image/png"));
}

#[tokio::test]
async fn test_upload_without_success_fails() {
    let server = CannedServer::start(vec![
        CannedResponse::ok(r#"{"data":{"imageUrl":"https://cdn.example.com/x.png"}}"#),
        CannedResponse::ok(r#"{"success":true,"data":{}}"#),
        CannedResponse::ok(r#"{"success":false,"messages":["Too large"]}"#),
    ])
    .await;
    let api = api_for(&server);
    let image = || LocalImage::new("a.jpg", vec![1, 2, 3]);

    let err = api.upload_image(image()).await.unwrap_err();
    assert_eq!(err.to_string(), "Upload failed");

    let err = api.upload_image(image()).await.unwrap_err();
    assert_eq!(err.to_string(), "Upload success but imageUrl missing");

    let err = api.upload_image(image()).await.unwrap_err();
    assert_eq!(err.to_string(), "Too large");
}

#[tokio::test]
async fn test_repository_uploads_file_reference() {
    let server = CannedServer::start(vec![CannedResponse::ok(
        r#"{"success":true,"data":{"imageUrl":"https://cdn.example.com/u/2.jpg"}}"#,
    )])
    .await;
    let mut file = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
    file.write_all(b"jpeg-bytes").unwrap();
    let reference = url::Url::from_file_path(file.path()).unwrap().to_string();

    let repo = RemoteContactsRepository::new(api_for(&server));
    let url = repo.upload_image(&reference).await.unwrap();

    assert_eq!(url, "https://cdn.example.com/u/2.jpg");
    assert!(server.requests()[0].body_text().contains("jpeg-bytes"));
}

#[tokio::test]
async fn test_repository_missing_file_skips_request() {
    let server = CannedServer::start(Vec::new()).await;
    let repo = RemoteContactsRepository::new(api_for(&server));

    let err = repo
        .upload_image("file:///definitely/not/here.jpg")
        .await
        .unwrap_err();

    assert!(matches!(err, RemoteError::LocalImage { .. }));
    assert!(server.requests().is_empty());
}

/// Blocks until another task on the runtime signals it.
struct SignalledImages {
    ready: std::sync::Mutex<std::sync::mpsc::Receiver<()>>,
}

impl ImageSource for SignalledImages {
    fn read(&self, reference: &str) -> RemoteResult<LocalImage> {
        self.ready
            .lock()
            .unwrap()
            .recv_timeout(Duration::from_secs(5))
            .map_err(|e| RemoteError::LocalImage {
                reference: reference.to_string(),
                reason: e.to_string(),
            })?;
        Ok(LocalImage::new("slow.jpg", b"slow-bytes".to_vec()))
    }
}

#[tokio::test]
async fn test_image_read_does_not_block_the_runtime() {
    let server = CannedServer::start(vec![CannedResponse::ok(
        r#"{"success":true,"data":{"imageUrl":"https://cdn.example.com/slow.jpg"}}"#,
    )])
    .await;
    let (signal, ready) = std::sync::mpsc::channel();
    let repo = RemoteContactsRepository::with_image_source(
        api_for(&server),
        Arc::new(SignalledImages {
            ready: std::sync::Mutex::new(ready),
        }),
    );

    // On the single-threaded test runtime this task only runs if the read
    // is off the executor thread.
    tokio::spawn(async move {
        let _ = signal.send(());
    });

    let url = repo.upload_image("content://media/9").await.unwrap();
    assert_eq!(url, "https://cdn.example.com/slow.jpg");
}

struct StaticImages;

impl ImageSource for StaticImages {
    fn read(&self, reference: &str) -> RemoteResult<LocalImage> {
        if reference.starts_with("content://") {
            Ok(LocalImage::new("", b"from-provider".to_vec()))
        } else {
            FileImageSource.read(reference)
        }
    }
}

#[tokio::test]
async fn test_store_end_to_end_with_content_image() {
    let server = CannedServer::start(vec![
        CannedResponse::ok(r#"{"success":true,"data":{"imageUrl":"https://cdn.example.com/c.jpg"}}"#),
        CannedResponse::ok(r#"{"success":true}"#),
        CannedResponse::ok(USERS_BODY),
    ])
    .await;
    let repo = RemoteContactsRepository::with_image_source(api_for(&server), Arc::new(StaticImages));
    let mut store = ContactStore::new(repo);

    store
        .create_contact(&fields("Cy", "Doe", "42"), "content://media/5")
        .await
        .unwrap();

    let requests = server.requests();
    assert_eq!(requests[0].path, "/api/User/UploadImage");
    assert!(requests[0].body_text().contains("photo_"));
    assert_eq!(
        requests[1].body_json()["profileImageUrl"],
        "https://cdn.example.com/c.jpg"
    );
    assert_eq!(requests[2].path, "/api/User/GetAll");
    assert_eq!(store.state().grouped.contact_count(), 2);
}
