//! HTTP request handlers for the touch control API
//!
//! Handlers only see the `ParamStore` trait and are store-agnostic.

pub mod health;
pub mod touch;
