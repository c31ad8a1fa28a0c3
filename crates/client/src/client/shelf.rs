//! Shelf API operations.

use async_trait::async_trait;
use promoshelf_core::shelf::{ShelfItem, ShelfResponse};
use promoshelf_core::storage::{self, ShelfSource};

use super::ShelfClient;
use crate::error::Result;

impl ShelfClient {
    /// Fetch the shelf document.
    pub async fn get_shelf(&self) -> Result<ShelfResponse> {
        let response = self
            .client
            .get(self.url(&self.shelf_path))
            .send()
            .await?;
        self.handle_response(response).await
    }
}

#[async_trait]
impl ShelfSource for ShelfClient {
    async fn fetch_shelf(&self) -> storage::Result<Vec<ShelfItem>> {
        let items = self.get_shelf().await?.into_items();
        tracing::debug!(count = items.len(), base_url = %self.base_url, "Fetched shelf");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use promoshelf_core::storage::RemoteFetchError;
    use crate::error::ClientError;
    use serde_json::json;
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn shelf_document() -> serde_json::Value {
        json!({
            "_embedded": {
                "contents": [
                    {
                        "contentType": "brochure",
                        "content": {
                            "id": 1,
                            "brochureImage": "https://img.example/1.png",
                            "publisher": {"id": "p-1", "name": "Aldi"},
                            "distance": 0.8
                        }
                    },
                    {
                        "contentType": "superBannerCarousel",
                        "content": []
                    },
                    {
                        "contentType": "brochurePremium",
                        "content": {"id": 2, "distance": 3.1}
                    }
                ]
            }
        })
    }

    #[tokio::test]
    async fn test_fetch_shelf_decodes_items() {
        let router = Router::new().route("/shelf.json", get(|| async { Json(shelf_document()) }));
        let client = ShelfClient::new(serve(router).await);

        let items = client.fetch_shelf().await.unwrap();

        assert_eq!(items.len(), 3);
        assert!(matches!(items[0], ShelfItem::Brochure { .. }));
        assert_eq!(items[1], ShelfItem::Other);
        assert!(matches!(items[2], ShelfItem::BrochurePremium { .. }));
    }

    #[tokio::test]
    async fn test_fetch_shelf_uses_configured_path() {
        let router =
            Router::new().route("/v2/feed.json", get(|| async { Json(shelf_document()) }));
        let client = ShelfClient::new(serve(router).await).with_shelf_path("v2/feed.json");

        let items = client.fetch_shelf().await.unwrap();

        assert_eq!(items.len(), 3);
    }

    #[tokio::test]
    async fn test_server_error_becomes_status() {
        let router = Router::new().route(
            "/shelf.json",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        );
        let client = ShelfClient::new(serve(router).await);

        let err = client.fetch_shelf().await.unwrap_err();

        assert_eq!(
            err,
            RemoteFetchError::Status {
                status: 503,
                message: "maintenance".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_body_becomes_invalid_response() {
        let router = Router::new().route("/shelf.json", get(|| async { "not json" }));
        let client = ShelfClient::new(serve(router).await);

        let err = client.fetch_shelf().await.unwrap_err();

        assert!(matches!(err, RemoteFetchError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_missing_embedded_is_invalid_response() {
        let router = Router::new().route(
            "/shelf.json",
            get(|| async { Json(json!({"contents": []})) }),
        );
        let client = ShelfClient::new(serve(router).await);

        let err = client.get_shelf().await.unwrap_err();

        assert!(matches!(err, ClientError::InvalidResponse(ref m) if m.contains("_embedded")));
    }

    #[tokio::test]
    async fn test_unreachable_host_becomes_connection_failed() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = ShelfClient::new(format!("http://{addr}"));

        let err = client.fetch_shelf().await.unwrap_err();

        assert!(matches!(err, RemoteFetchError::ConnectionFailed(_)));
    }
}
