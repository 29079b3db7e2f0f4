//! E2E tests for the touch control API using touch-client
//!
//! Each test starts the real router on an ephemeral port and talks to it over
//! HTTP, either through the typed client or with raw reqwest calls for bodies
//! the client would never send.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use touch_client::testing::TestServer;
use touch_client::TouchClientError;
use touch_core::{
    MemoryParamStore, ParamStore, SetTouchRequest, StoreError, StoreResult, DISABLE_TOUCH_INPUT,
};

// =============================================================================
// Mock Stores
// =============================================================================

/// Store that can be told to fail reads and/or writes
#[derive(Default)]
struct FlakyStore {
    inner: MemoryParamStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FlakyStore {
    fn failing_reads() -> Self {
        let store = Self::default();
        store.fail_reads.store(true, Ordering::SeqCst);
        store
    }

    fn failing_writes() -> Self {
        let store = Self::default();
        store.fail_writes.store(true, Ordering::SeqCst);
        store
    }
}

#[async_trait::async_trait]
impl ParamStore for FlakyStore {
    fn name(&self) -> &str {
        "flaky"
    }

    async fn get_bool(&self, key: &str) -> StoreResult<bool> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Read {
                key: key.to_string(),
                source: std::io::Error::other("simulated read fault"),
            });
        }
        self.inner.get_bool(key).await
    }

    async fn put_bool(&self, key: &str, value: bool) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write {
                key: key.to_string(),
                source: std::io::Error::other("simulated write fault"),
            });
        }
        self.inner.put_bool(key, value).await
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

async fn post_raw(server: &TestServer, body: &str) -> (u16, serde_json::Value) {
    let response = reqwest::Client::new()
        .post(server.url("/touch/set"))
        .header("content-type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_ok() {
    let (server, _) = TestServer::with_memory_store().await.unwrap();
    let health = server.client.health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.service, "touch_control");
}

#[tokio::test]
async fn test_health_ignores_store_failures() {
    let store = FlakyStore::failing_reads();
    store.fail_writes.store(true, Ordering::SeqCst);
    let server = TestServer::with_store(Arc::new(store)).await.unwrap();

    let health = server.client.health().await.unwrap();
    assert_eq!(health.status, "ok");
}

// =============================================================================
// Status / Set
// =============================================================================

#[tokio::test]
async fn test_status_defaults_to_enabled() {
    let (server, _) = TestServer::with_memory_store().await.unwrap();
    let status = server.client.touch_status().await.unwrap();
    assert!(status.success);
    assert!(!status.touch_disabled);
    assert!(status.touch_enabled);
}

#[tokio::test]
async fn test_disable_field_sets_value_directly() {
    let (server, store) = TestServer::with_memory_store().await.unwrap();
    let client = &server.client;

    for v in [true, false] {
        let result = client.set_touch(&SetTouchRequest::disable(v)).await.unwrap();
        assert!(result.success);
        assert_eq!(result.touch_disabled, v);

        let status = client.touch_status().await.unwrap();
        assert_eq!(status.touch_disabled, v);
        assert_eq!(status.touch_enabled, !v);
        assert_eq!(store.get_bool(DISABLE_TOUCH_INPUT).await.unwrap(), v);
    }
}

#[tokio::test]
async fn test_enable_field_sets_negation() {
    let (server, _) = TestServer::with_memory_store().await.unwrap();
    let client = &server.client;

    for v in [true, false] {
        let result = client.set_touch(&SetTouchRequest::enable(v)).await.unwrap();
        assert_eq!(result.touch_disabled, !v);

        let status = client.touch_status().await.unwrap();
        assert_eq!(status.touch_disabled, !v);
        assert_eq!(status.touch_enabled, v);
    }
}

#[tokio::test]
async fn test_response_messages() {
    let (server, _) = TestServer::with_memory_store().await.unwrap();

    let result = server.client.disable_touch().await.unwrap();
    assert_eq!(result.message, "Touch input disabled");

    let result = server.client.enable_touch().await.unwrap();
    assert_eq!(result.message, "Touch input enabled");

    let result = server
        .client
        .set_touch(&SetTouchRequest::enable(false))
        .await
        .unwrap();
    assert_eq!(result.message, "Touch input disabled");
}

#[tokio::test]
async fn test_disable_takes_precedence_when_both_present() {
    let (server, _) = TestServer::with_memory_store().await.unwrap();

    let (status, body) = post_raw(&server, r#"{"disable": true, "enable": true}"#).await;
    assert_eq!(status, 200);
    assert_eq!(body["touch_disabled"], true);
    assert_eq!(body["message"], "Touch input disabled");

    let (status, body) = post_raw(&server, r#"{"enable": false, "disable": false}"#).await;
    assert_eq!(status, 200);
    assert_eq!(body["touch_disabled"], false);
    assert_eq!(body["message"], "Touch input enabled");
}

#[tokio::test]
async fn test_repeated_set_is_idempotent() {
    let (server, store) = TestServer::with_memory_store().await.unwrap();
    let request = SetTouchRequest::disable(true);

    let first = server.client.set_touch(&request).await.unwrap();
    let second = server.client.set_touch(&request).await.unwrap();

    assert_eq!(first, second);
    assert!(store.get_bool(DISABLE_TOUCH_INPUT).await.unwrap());
}

// =============================================================================
// Client Input Errors
// =============================================================================

#[tokio::test]
async fn test_empty_object_returns_400() {
    let (server, store) = TestServer::with_memory_store().await.unwrap();

    let (status, body) = post_raw(&server, "{}").await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Must provide 'disable' or 'enable' parameter");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_client_maps_400_to_bad_request() {
    let (server, _) = TestServer::with_memory_store().await.unwrap();

    let err = server
        .client
        .set_touch(&SetTouchRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, TouchClientError::BadRequest(_)));
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let (server, _) = TestServer::with_memory_store().await.unwrap();

    let (status, body) = post_raw(&server, "{\"disable\": tru").await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_null_disable_with_enable_returns_400() {
    let (server, store) = TestServer::with_memory_store().await.unwrap();

    let (status, body) = post_raw(&server, r#"{"disable": null, "enable": false}"#).await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "'disable' must be a boolean, got null");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_wrong_field_type_returns_400() {
    let (server, store) = TestServer::with_memory_store().await.unwrap();

    let (status, body) = post_raw(&server, r#"{"disable": "yes"}"#).await;
    assert_eq!(status, 400);
    assert_eq!(body["success"], false);
    assert!(store.is_empty());
}

// =============================================================================
// Store Failures
// =============================================================================

#[tokio::test]
async fn test_status_read_failure_returns_500() {
    let server = TestServer::with_store(Arc::new(FlakyStore::failing_reads()))
        .await
        .unwrap();

    let err = server.client.touch_status().await.unwrap_err();
    match err {
        TouchClientError::ServerError { status, message } => {
            assert_eq!(status, 500);
            assert!(message.starts_with("store read failure"));
            assert!(message.contains("simulated read fault"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_set_write_failure_returns_500() {
    let server = TestServer::with_store(Arc::new(FlakyStore::failing_writes()))
        .await
        .unwrap();

    let (status, body) = post_raw(&server, r#"{"disable": true}"#).await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("store write failure"));
    assert!(error.contains("simulated write fault"));
}

#[tokio::test]
async fn test_set_read_back_failure_returns_500() {
    let store = Arc::new(FlakyStore::failing_reads());
    let server = TestServer::with_store(store.clone()).await.unwrap();

    let (status, body) = post_raw(&server, r#"{"enable": false}"#).await;
    assert_eq!(status, 500);
    assert_eq!(body["success"], false);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("store write failure"));

    // The write itself went through before the read-back failed
    store.fail_reads.store(false, Ordering::SeqCst);
    let status = server.client.touch_status().await.unwrap();
    assert!(status.touch_disabled);
}

#[tokio::test]
async fn test_server_survives_store_errors() {
    let store = Arc::new(FlakyStore::failing_reads());
    let server = TestServer::with_store(store.clone()).await.unwrap();

    assert!(server.client.touch_status().await.is_err());

    store.fail_reads.store(false, Ordering::SeqCst);
    let status = server.client.touch_status().await.unwrap();
    assert!(status.success);
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_sets_last_write_wins() {
    let (server, store) = TestServer::with_memory_store().await.unwrap();
    let client = &server.client;

    for _ in 0..10 {
        let disable_req = SetTouchRequest::disable(true);
        let enable_req = SetTouchRequest::enable(true);
        let (a, b) = tokio::join!(
            client.set_touch(&disable_req),
            client.set_touch(&enable_req),
        );
        let a = a.unwrap();
        let b = b.unwrap();
        assert_eq!(a.message, "Touch input disabled");
        assert_eq!(b.message, "Touch input enabled");

        // Each response reports a value some request wrote
        let written = [true, false];
        assert!(written.contains(&a.touch_disabled));
        assert!(written.contains(&b.touch_disabled));

        // The final state is one of the two writes, and reads agree with it
        let stored = store.get_bool(DISABLE_TOUCH_INPUT).await.unwrap();
        assert!(written.contains(&stored));
        let status = client.touch_status().await.unwrap();
        assert_eq!(status.touch_disabled, stored);
        assert_eq!(status.touch_enabled, !stored);
    }
}

#[tokio::test]
async fn test_sequential_sets_last_write_wins() {
    let (server, store) = TestServer::with_memory_store().await.unwrap();

    server.client.disable_touch().await.unwrap();
    server.client.enable_touch().await.unwrap();
    assert!(!store.get_bool(DISABLE_TOUCH_INPUT).await.unwrap());

    server.client.enable_touch().await.unwrap();
    server.client.disable_touch().await.unwrap();
    assert!(store.get_bool(DISABLE_TOUCH_INPUT).await.unwrap());
}
