//! In-process server harness for integration tests
//!
//! Runs the real touch control router over a caller-supplied parameter store
//! on an ephemeral loopback port, with a [`TouchClient`] already pointed at it.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use touch_api::{create_router, AppState};
use touch_core::{MemoryParamStore, ParamStore};

use crate::{Result, TouchClient};

/// Client timeout for test requests
const TEST_TIMEOUT: Duration = Duration::from_secs(5);
const TEST_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Touch control server bound to `127.0.0.1:0`, stopped on drop
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: TouchClient,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Serve the touch API over `store`
    ///
    /// ```ignore
    /// let server = TestServer::with_store(Arc::new(FailingStore)).await?;
    /// assert!(server.client.touch_status().await.is_err());
    /// ```
    pub async fn with_store(store: Arc<dyn ParamStore>) -> Result<Self> {
        let router = create_router(AppState::new(store));
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let shutdown = async {
                let _ = shutdown_rx.await;
            };
            if let Err(e) = axum::serve(listener, router)
                .with_graceful_shutdown(shutdown)
                .await
            {
                tracing::warn!("Test server on {} exited: {}", addr, e);
            }
        });

        let client = TouchClient::with_config(
            &format!("http://{}", addr),
            TEST_TIMEOUT,
            TEST_CONNECT_TIMEOUT,
        )?;
        tracing::debug!(%addr, "Test server listening");

        Ok(Self {
            addr,
            client,
            shutdown_tx: Some(shutdown_tx),
            handle,
        })
    }

    /// Serve over a fresh in-memory store, returning the store for inspection
    pub async fn with_memory_store() -> Result<(Self, Arc<MemoryParamStore>)> {
        let store = Arc::new(MemoryParamStore::new());
        let server = Self::with_store(store.clone()).await?;
        Ok((server, store))
    }

    /// Absolute URL for `path` on this server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        self.handle.abort();
    }
}
