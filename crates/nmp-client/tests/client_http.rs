//! End-to-end client tests against the stub backend

use nmp_client::{ApiClient, ApiError, ClientConfig, FileSessionStore, MemorySessionStore};
use nmp_domain::{Credentials, MeetingId};
use nmp_test_utils::spawn_stub;
use serde_json::json;
use std::sync::Arc;

fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(
        ClientConfig::new().with_base_url(base_url),
        Arc::new(MemorySessionStore::new()),
    )
}

async fn logged_in_client(base_url: &str) -> ApiClient {
    let client = client_for(base_url);
    client
        .login(&Credentials::new("david@example.org", "correct-horse"))
        .await
        .unwrap();
    client
}

#[tokio::test]
async fn login_stores_session_and_later_requests_carry_bearer() {
    let stub = spawn_stub();
    let client = client_for(&stub.base_url());

    let session = client
        .login(&Credentials::new("david@example.org", "correct-horse"))
        .await
        .unwrap();
    assert_eq!(session.token, "stub-token");
    assert_eq!(session.user.name, "David Park");
    assert_eq!(client.current_session().unwrap(), Some(session));

    client.dashboard().await.unwrap();

    let headers = stub.auth_headers();
    // Login went out without a token, the dashboard fetch with one.
    assert_eq!(headers[0], None);
    assert_eq!(headers[1].as_deref(), Some("Bearer stub-token"));
}

#[tokio::test]
async fn login_failure_maps_to_auth_required_and_stores_nothing() {
    let stub = spawn_stub();
    let client = client_for(&stub.base_url());

    let err = client
        .login(&Credentials::new("david@example.org", "wrong"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::AuthRequired));
    assert!(client.current_session().unwrap().is_none());
}

#[tokio::test]
async fn unauthorized_response_clears_the_stored_session() {
    let stub = spawn_stub();
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileSessionStore::new(dir.path()));
    let client = ApiClient::new(
        ClientConfig::new().with_base_url(&stub.base_url()),
        store.clone(),
    );
    client
        .login(&Credentials::new("david@example.org", "correct-horse"))
        .await
        .unwrap();
    assert!(client.current_session().unwrap().is_some());

    stub.force_unauthorized(true);
    let err = client.meetings(&[]).await.unwrap_err();
    assert!(err.is_auth());

    // Both persisted keys are gone.
    assert!(client.current_session().unwrap().is_none());
    assert!(!dir.path().join("auth_token").exists());
    assert!(!dir.path().join("user_data.json").exists());
}

#[tokio::test]
async fn not_found_error_names_the_endpoint() {
    let stub = spawn_stub();
    let client = logged_in_client(&stub.base_url()).await;

    let id = MeetingId::new();
    let err = client.meeting(id).await.unwrap_err();
    match err {
        ApiError::NotFound { endpoint } => {
            assert_eq!(endpoint, format!("/meetings/{id}"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_maps_to_server_variant() {
    let stub = spawn_stub();
    let client = logged_in_client(&stub.base_url()).await;

    stub.force_server_error(true);
    let err = client.documents(&[]).await.unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 500 }));
}

#[tokio::test]
async fn network_error_names_the_base_url() {
    // Nothing listens on port 9; connection is refused immediately.
    let client = client_for("http://127.0.0.1:9");
    let err = client.health().await.unwrap_err();
    match err {
        ApiError::Network { url, .. } => assert_eq!(url, "http://127.0.0.1:9"),
        other => panic!("expected Network, got {other:?}"),
    }
}

#[tokio::test]
async fn logout_clears_locally_even_when_the_server_fails() {
    let stub = spawn_stub();
    let client = logged_in_client(&stub.base_url()).await;
    assert!(client.current_session().unwrap().is_some());

    stub.fail_logout(true);
    client.logout().await.unwrap();
    assert!(client.current_session().unwrap().is_none());
}

#[tokio::test]
async fn created_documents_show_up_in_the_listing() {
    let stub = spawn_stub();
    let client = logged_in_client(&stub.base_url()).await;

    client
        .create_document(&json!({
            "title": "Bylaws 2025",
            "category": "legal",
            "file_name": "bylaws.pdf",
            "file_size": 245760,
            "file_type": "application/pdf"
        }))
        .await
        .unwrap();

    let documents = client.documents(&[]).await.unwrap();
    assert!(documents.iter().any(|d| d.title == "Bylaws 2025"));
}
