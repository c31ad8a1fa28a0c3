//! HTTP client for the shelf endpoint.

pub mod shelf;

use crate::error::{ClientError, Result};

/// Default host serving the shelf document.
pub const DEFAULT_BASE_URL: &str = "https://mobile-s3-test-assets.aws-sdlc-bonial.com/";

/// Default path of the shelf document relative to the base URL.
pub const DEFAULT_SHELF_PATH: &str = "shelf.json";

/// HTTP client for the shelf endpoint.
#[derive(Debug, Clone)]
pub struct ShelfClient {
    client: reqwest::Client,
    base_url: String,
    shelf_path: String,
}

impl ShelfClient {
    /// Create a new client with the given base URL and the default shelf path.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            shelf_path: DEFAULT_SHELF_PATH.to_string(),
        }
    }

    /// Override the path of the shelf document.
    pub fn with_shelf_path(mut self, shelf_path: impl Into<String>) -> Self {
        self.shelf_path = shelf_path.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Handle error responses and decode successful bodies.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
