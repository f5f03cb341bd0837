//! WebDAV transport for the skiff file manager.
//!
//! A thin HTTP client used by actions that talk to the storage server.
//! Connection pooling and timeouts are configured once through
//! [`skiff_core::DavConfig`]; individual calls are plain request/response.

mod client;

pub use client::{DavClient, DavError};

// Re-export response status codes for callers.
pub use reqwest::StatusCode;
