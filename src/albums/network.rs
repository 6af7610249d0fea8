//! Network abstraction used by the store
//!
//! The store only needs "send this request, give me the body". Keeping that
//! behind [`NetworkClient`] lets tests substitute a mock and keeps reqwest
//! out of the store.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

/// User agent sent with every request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A GET request expecting a JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRequest {
    pub url: Url,
}

impl JsonRequest {
    pub fn new(url: Url) -> Self {
        Self { url }
    }
}

/// Raw response from the network layer
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

/// Transport-level failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Failed to build HTTP client: {0}")]
    Build(String),
}

/// Capability to send a request and hand back the response once.
#[async_trait]
pub trait NetworkClient: Send + Sync {
    async fn send_request(&self, request: JsonRequest) -> Result<HttpResponse, NetworkError>;
}

/// reqwest-backed network client
pub struct HttpNetworkClient {
    http_client: reqwest::Client,
}

impl HttpNetworkClient {
    /// Create a new client
    ///
    /// The client accepts gzip-compressed responses and identifies itself
    /// with a User-Agent. `timeout` bounds each whole request.
    pub fn new(timeout: Option<Duration>) -> Result<Self, NetworkError> {
        let mut builder = reqwest::Client::builder().gzip(true).user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| NetworkError::Build(e.to_string()))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl NetworkClient for HttpNetworkClient {
    async fn send_request(&self, request: JsonRequest) -> Result<HttpResponse, NetworkError> {
        let response = self
            .http_client
            .get(request.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| NetworkError::Request(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            );
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| NetworkError::Body(e.without_url().to_string()))?
            .to_vec();

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}
