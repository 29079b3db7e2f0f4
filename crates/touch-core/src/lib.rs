//! touch-core - Core traits and types for the touch input control service
//!
//! This crate provides the parameter store abstraction that the HTTP layer is
//! written against, the concrete stores (file-backed for devices, in-memory
//! for tests and demos), and the JSON wire models shared by server and client.

pub mod error;
pub mod file;
pub mod memory;
pub mod models;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use file::{FileParamStore, DEFAULT_PARAMS_ROOT};
pub use memory::MemoryParamStore;
pub use models::*;
pub use store::{ParamStore, DISABLE_TOUCH_INPUT};
