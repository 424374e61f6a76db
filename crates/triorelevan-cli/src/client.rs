use reqwest::blocking::Client;
use thiserror::Error;
use triorelevan_engine::search::{ErrorBody, SearchResponse};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{message} ({status})")]
    Api { status: u16, message: String },
}

/// Blocking client for the server's `/api/search` route.
pub struct SearchClient {
    http_client: Client,
    server_url: String,
}

impl SearchClient {
    pub fn new(server_url: impl Into<String>) -> Result<Self, ClientError> {
        Ok(Self {
            http_client: Client::builder().build()?,
            server_url: server_url.into(),
        })
    }

    pub fn search_url(&self) -> String {
        format!("{}/api/search", self.server_url.trim_end_matches('/'))
    }

    pub fn search(&self, query: &str, k: u32) -> Result<SearchResponse, ClientError> {
        let k = k.to_string();
        let response = self
            .http_client
            .get(self.search_url())
            .query(&[("q", query), ("k", k.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .map(|body| body.error)
                .unwrap_or_else(|_| status.canonical_reason().unwrap_or("error").to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_joins_paths() {
        let client = SearchClient::new("http://127.0.0.1:3000/").unwrap();
        assert_eq!(client.search_url(), "http://127.0.0.1:3000/api/search");

        let client = SearchClient::new("http://search.local").unwrap();
        assert_eq!(client.search_url(), "http://search.local/api/search");
    }

    #[test]
    fn api_error_message() {
        let err = ClientError::Api {
            status: 400,
            message: "Query parameter is required".into(),
        };
        assert_eq!(err.to_string(), "Query parameter is required (400)");
    }
}
