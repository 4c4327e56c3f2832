// Credential lifecycle against a mock provider and a real file store

use crate::{TEST_KEY, base_url};

use planner_core::CREDENTIAL_STORAGE_KEY;
use planner_core::credential::{CredentialState, CredentialStore, InvalidReason};
use planner_core::gemini_client::GeminiClient;
use planner_core::storage::{FileStore, KeyValueStore};

use std::sync::{Arc, Mutex};

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_probe(server: &MockServer, status: u16, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(query_param("key", TEST_KEY))
        .respond_with(ResponseTemplate::new(status).set_body_json(json!({})))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// **VALUE**: Full happy path from first launch to restart.
///
/// **WHY THIS MATTERS**: A confirmed key must be persisted once, announced
/// once, and trusted on the next launch without probing again.
#[tokio::test]
async fn given_accepted_key_when_restarting_then_confirmed_without_second_probe() {
    // GIVEN: A provider accepting the key exactly once and an empty data dir
    let server = MockServer::start().await;
    mount_probe(&server, 200, 1).await;
    let temp = TempDir::new().unwrap();
    let client = GeminiClient::new(&base_url(&server)).unwrap();
    let announced = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&announced);

    let mut store = CredentialStore::new(FileStore::in_dir(temp.path()), client.clone())
        .with_listener(move |key| {
            sink.lock()
                .unwrap()
                .push(key.map(|k| k.as_str().to_string()));
        });
    assert_eq!(store.initialize(), CredentialState::PendingInput);

    // WHEN: Submitting with surrounding whitespace
    let state = store.submit(&format!("  {TEST_KEY}\n")).await;

    // THEN: Confirmed, trimmed value persisted, owner told once
    assert_eq!(state, CredentialState::Confirmed);
    assert_eq!(
        FileStore::in_dir(temp.path())
            .get(CREDENTIAL_STORAGE_KEY)
            .unwrap()
            .as_deref(),
        Some(TEST_KEY)
    );
    assert_eq!(*announced.lock().unwrap(), vec![Some(TEST_KEY.to_string())]);

    // WHEN: A new process starts on the same data dir
    let mut restarted = CredentialStore::new(FileStore::in_dir(temp.path()), client);

    // THEN: Confirmed from storage; the mock's expect(1) checks no re-probe
    assert_eq!(restarted.initialize(), CredentialState::Confirmed);
    assert_eq!(restarted.credential().map(|k| k.as_str()), Some(TEST_KEY));
}

#[tokio::test]
async fn given_rejected_key_when_submitting_then_invalid_and_nothing_persisted() {
    let server = MockServer::start().await;
    mount_probe(&server, 400, 1).await;
    let temp = TempDir::new().unwrap();
    let client = GeminiClient::new(&base_url(&server)).unwrap();
    let mut store = CredentialStore::new(FileStore::in_dir(temp.path()), client);
    store.initialize();

    let state = store.submit(TEST_KEY).await;

    match state {
        CredentialState::Invalid(InvalidReason::Rejected { status_code, .. }) => {
            assert_eq!(status_code, Some(400));
        }
        other => panic!("Expected Invalid(Rejected), got {other:?}"),
    }
    assert!(!temp.path().join("storage.json").exists());
    assert_eq!(store.edit(), CredentialState::PendingInput);
}

/// **VALUE**: Verifies a badly formed key never reaches the network.
#[tokio::test]
async fn given_malformed_key_when_submitting_then_invalid_format_and_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let temp = TempDir::new().unwrap();
    let client = GeminiClient::new(&base_url(&server)).unwrap();
    let mut store = CredentialStore::new(FileStore::in_dir(temp.path()), client);
    store.initialize();

    let state = store.submit("sk-not-a-gemini-key-0123456789abcdef").await;

    assert!(matches!(
        state,
        CredentialState::Invalid(InvalidReason::Format(_))
    ));
}

#[tokio::test]
async fn given_confirmed_key_when_removing_then_erased_and_pending() {
    let server = MockServer::start().await;
    mount_probe(&server, 200, 1).await;
    let temp = TempDir::new().unwrap();
    let client = GeminiClient::new(&base_url(&server)).unwrap();
    let mut store = CredentialStore::new(FileStore::in_dir(temp.path()), client);
    store.initialize();
    store.submit(TEST_KEY).await;

    let state = store.remove();

    assert_eq!(state, CredentialState::PendingInput);
    assert_eq!(store.credential(), None);
    assert_eq!(
        FileStore::in_dir(temp.path())
            .get(CREDENTIAL_STORAGE_KEY)
            .unwrap(),
        None
    );
}
