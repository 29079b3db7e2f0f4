//! Touch control HTTP client implementation

use std::time::Duration;

use reqwest::{Client, StatusCode};
use touch_core::{ErrorEnvelope, HealthStatus, SetTouchRequest, SetTouchResponse, TouchStatus};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Result, TouchClientError};

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Touch control REST API client
#[derive(Debug, Clone)]
pub struct TouchClient {
    client: Client,
    base_url: Url,
}

impl TouchClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the service (e.g., "http://comma.local:5002")
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a new client with custom timeouts
    pub fn with_config(
        base_url: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let base_url = Url::parse(base_url)?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Check server health
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.base_url.join("/health")?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    /// Read the current touch input state
    #[instrument(skip(self))]
    pub async fn touch_status(&self) -> Result<TouchStatus> {
        let url = self.base_url.join("/touch/status")?;
        let response = self.client.get(url).send().await?;
        self.handle_response(response).await
    }

    /// Send a raw set request
    #[instrument(skip(self))]
    pub async fn set_touch(&self, request: &SetTouchRequest) -> Result<SetTouchResponse> {
        let url = self.base_url.join("/touch/set")?;
        debug!("Setting touch input via {}", url);

        let response = self.client.post(url).json(request).send().await?;
        self.handle_response(response).await
    }

    /// Disable touch input
    pub async fn disable_touch(&self) -> Result<SetTouchResponse> {
        self.set_touch(&SetTouchRequest::disable(true)).await
    }

    /// Enable touch input
    pub async fn enable_touch(&self) -> Result<SetTouchResponse> {
        self.set_touch(&SetTouchRequest::enable(true)).await
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| TouchClientError::ParseError(e.to_string()))
        } else {
            Err(self.extract_error(response, status).await)
        }
    }

    async fn extract_error(
        &self,
        response: reqwest::Response,
        status: StatusCode,
    ) -> TouchClientError {
        let message = match response.json::<ErrorEnvelope>().await {
            Ok(err) => err.error,
            Err(_) => format!("HTTP {}", status),
        };

        match status {
            StatusCode::BAD_REQUEST => TouchClientError::BadRequest(message),
            _ => TouchClientError::server_error(status.as_u16(), message),
        }
    }
}
