//! HTTP client for WebDAV operations.

use reqwest::{Client, StatusCode};
use skiff_core::DavConfig;
use thiserror::Error;

/// Errors raised by the WebDAV transport.
#[derive(Debug, Error)]
pub enum DavError {
    /// Request could not be built or sent.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with an error status.
    #[error("server returned {code}")]
    Status { code: StatusCode },
}

/// Thin wrapper around a pooled HTTP client.
#[derive(Debug, Clone)]
pub struct DavClient {
    client: Client,
}

impl DavClient {
    /// Create a new client from transport settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &DavConfig) -> Result<Self, DavError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Create with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_defaults() -> Result<Self, DavError> {
        Self::new(&DavConfig::default())
    }

    /// Delete the resource behind `url`.
    ///
    /// Any non-error response counts as success. The call is single-shot:
    /// no retries, no cancellation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails on the wire or the server
    /// answers with a 4xx/5xx status.
    pub async fn delete(&self, url: &str) -> Result<(), DavError> {
        let response = self.client.delete(url).send().await?;
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(DavError::Status { code: status });
        }
        tracing::debug!(%url, %status, "deleted remote resource");
        Ok(())
    }
}
