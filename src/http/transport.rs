//! HTTP transport for configuration documents.
//!
//! # Responsibilities
//! - Issue a single GET for a JSON document with custom headers
//! - Map non-success statuses and malformed bodies to distinct errors
//! - Enforce connect and request timeouts from configuration
//!
//! # Design Decisions
//! - No retries: a failed fetch is fatal to the bootstrap
//! - The trait is the seam for tests; production uses reqwest

use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::TimeoutConfig;

/// Errors produced by a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid header '{0}'")]
    InvalidHeader(String),
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Insert a header whose name comes from configuration.
pub fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> TransportResult<()> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| TransportError::InvalidHeader(name.to_string()))?;
    let header_value =
        HeaderValue::from_str(value).map_err(|_| TransportError::InvalidHeader(name.to_string()))?;
    headers.insert(header_name, header_value);
    Ok(())
}

/// Fetches JSON documents over HTTP.
pub trait ConfigTransport: Send + Sync {
    /// GET `url` with `headers` and parse the body as JSON.
    fn get_json(
        &self,
        url: &Url,
        headers: &HeaderMap,
    ) -> impl Future<Output = TransportResult<Value>> + Send;
}

/// reqwest-backed transport.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the configured timeouts.
    pub fn new(timeouts: &TimeoutConfig) -> TransportResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .timeout(Duration::from_secs(timeouts.request_secs))
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl ConfigTransport for ReqwestTransport {
    async fn get_json(&self, url: &Url, headers: &HeaderMap) -> TransportResult<Value> {
        tracing::debug!(url = %url, headers = headers.len(), "Fetching configuration document");

        let resp = self
            .client
            .get(url.clone())
            .headers(headers.clone())
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
