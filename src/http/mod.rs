//! HTTP transport
//!
//! The transport boundary: one request in, one decoded response (or typed
//! error) out. Cursors and fetchers build on this without adding any retry
//! or recovery behavior.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
