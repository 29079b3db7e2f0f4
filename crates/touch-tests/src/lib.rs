//! Integration tests for the touch control service
//!
//! These tests run the real router over HTTP on an ephemeral loopback port
//! via `touch_client::testing::TestServer`, with in-memory or fault-injecting
//! parameter stores. No device or parameter directory is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p touch-tests
//! ```
//!
//! # Test Structure
//!
//! - `touch_e2e.rs` - Health, status and set over HTTP, input errors, store failures

// This crate only contains tests, no library code
