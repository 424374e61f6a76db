//! Client for the external retrieval backend.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use triorelevan_config::{BackendConfig, BackendMode};
use triorelevan_engine::search::{SearchRequest, SearchResponse, mock_response};

/// Errors that can occur when calling the retrieval backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Network-level error during HTTP communication.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    /// Backend answered with a non-success status.
    #[error("Backend error: {status} - {body}")]
    Status { status: u16, body: String },

    /// Body was not a valid search response.
    #[error("Invalid response from backend: {0}")]
    InvalidResponse(String),
}

/// HTTP client for `GET {base_url}/search?q=..&k=..`.
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    http_client: Client,
    base_url: String,
}

impl RemoteBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the backend body as untouched JSON.
    pub async fn fetch(&self, request: &SearchRequest) -> Result<Value, BackendError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let k = request.k.to_string();

        log::debug!("Sending search request to {url}");

        let response = self
            .http_client
            .get(&url)
            .query(&[("q", request.query.as_str()), ("k", k.as_str())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    log::error!("Search request timed out");
                    return BackendError::Timeout;
                }
                log::error!("Network error during search request: {e}");
                BackendError::Network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Backend returned {status}: {body}");
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse backend response: {e}");
            BackendError::InvalidResponse(format!("JSON parse error: {e}"))
        })
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, BackendError> {
        let body = self.fetch(request).await?;
        serde_json::from_value(body).map_err(|e| {
            log::error!("Backend response has unexpected shape: {e}");
            BackendError::InvalidResponse(format!("unexpected shape: {e}"))
        })
    }
}

/// Where searches are answered from.
#[derive(Debug, Clone)]
pub enum SearchBackend {
    Remote(RemoteBackend),
    Mock,
}

impl SearchBackend {
    pub fn from_config(config: &BackendConfig) -> Result<Self, BackendError> {
        match config.mode {
            BackendMode::Proxy => Ok(SearchBackend::Remote(RemoteBackend::new(
                config.base_url.clone(),
                Duration::from_secs(config.timeout_secs),
            )?)),
            BackendMode::Mock => Ok(SearchBackend::Mock),
        }
    }

    pub fn mode(&self) -> BackendMode {
        match self {
            SearchBackend::Remote(_) => BackendMode::Proxy,
            SearchBackend::Mock => BackendMode::Mock,
        }
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, BackendError> {
        match self {
            SearchBackend::Remote(remote) => remote.search(request).await,
            SearchBackend::Mock => Ok(mock_response(request)),
        }
    }

    /// Body for the API route: the remote JSON as received, or the mock
    /// response serialized.
    pub async fn relay(&self, request: &SearchRequest) -> Result<Value, BackendError> {
        match self {
            SearchBackend::Remote(remote) => remote.fetch(request).await,
            SearchBackend::Mock => serde_json::to_value(mock_response(request))
                .map_err(|e| BackendError::InvalidResponse(e.to_string())),
        }
    }
}
