//! Touch Control Client Library
//!
//! Provides a typed HTTP client for scripted control of a device's touch input.
//!
//! # Example
//!
//! ```rust,no_run
//! use touch_client::TouchClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = TouchClient::new("http://localhost:5002")?;
//!
//!     let status = client.touch_status().await?;
//!     if status.touch_enabled {
//!         client.disable_touch().await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! With the `testing` feature, `testing::TestServer` runs the real router
//! over any parameter store on an ephemeral port:
//!
//! ```rust,ignore
//! use touch_client::testing::TestServer;
//!
//! let (server, store) = TestServer::with_memory_store().await?;
//! server.client.disable_touch().await?;
//! ```

pub mod client;
pub mod error;
#[cfg(feature = "testing")]
pub mod testing;

pub use client::TouchClient;
pub use error::{Result, TouchClientError};
pub use touch_core::{HealthStatus, SetTouchRequest, SetTouchResponse, TouchStatus};
