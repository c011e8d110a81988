use crate::error::{DirectoryError, Result};
use crate::record::Record;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

/// Endpoint serving the user directory.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Provider of the full record list.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetches every record in one request.
    async fn fetch_all(&self) -> Result<Vec<Record>>;
}

/// Fetches records with a single HTTP GET returning a JSON array.
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    client: Client,
    endpoint: String,
}

impl HttpRecordSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpRecordSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_all(&self) -> Result<Vec<Record>> {
        debug!("GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| DirectoryError::SourceUnavailable(e.to_string()))?;

        let records = response
            .json::<Vec<Record>>()
            .await
            .map_err(|e| DirectoryError::SourceUnavailable(format!("invalid record list: {}", e)))?;

        info!("Fetched {} records from {}", records.len(), self.endpoint);
        Ok(records)
    }
}

/// Serves a fixed record list, or a fixed failure.
#[derive(Debug, Clone)]
pub struct StaticRecordSource {
    outcome: Result<Vec<Record>>,
}

impl StaticRecordSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { outcome: Ok(records) }
    }

    /// A source whose every fetch fails with `SourceUnavailable`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(DirectoryError::SourceUnavailable(reason.into())),
        }
    }
}

#[async_trait]
impl RecordSource for StaticRecordSource {
    async fn fetch_all(&self) -> Result<Vec<Record>> {
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::get};
    use serde_json::json;
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/users", addr)
    }

    fn users_json() -> serde_json::Value {
        json!([
            {
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "email": "Sincere@april.biz",
                "address": { "street": "Kulas Light", "suite": "Apt. 556", "city": "Gwenborough", "zipcode": "92998-3874" },
                "phone": "1-770-736-8031 x56442",
                "website": "hildegard.org",
                "company": { "name": "Romaguera-Crona" }
            },
            {
                "id": 2,
                "name": "Ervin Howell",
                "username": "Antonette",
                "email": "Shanna@melissa.tv",
                "address": { "street": "Victor Plains", "suite": "Suite 879", "city": "Wisokyburgh", "zipcode": "90566-7771" },
                "phone": "010-692-6593 x09125",
                "website": "anastasia.net",
                "company": { "name": "Deckow-Crist" }
            }
        ])
    }

    #[tokio::test]
    async fn test_http_source_fetches_records() {
        let router = Router::new().route("/users", get(|| async { axum::Json(users_json()) }));
        let source = HttpRecordSource::new(serve(router).await);

        let records = source.fetch_all().await.unwrap();
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(records[1].name, "Ervin Howell");
    }

    #[tokio::test]
    async fn test_http_source_maps_server_error() {
        let router = Router::new().route("/users", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }));
        let source = HttpRecordSource::new(serve(router).await);

        let result = source.fetch_all().await;
        assert!(matches!(result, Err(DirectoryError::SourceUnavailable(_))));
    }

    #[tokio::test]
    async fn test_http_source_maps_malformed_body() {
        let router = Router::new().route("/users", get(|| async { axum::Json(json!({ "users": [] })) }));
        let source = HttpRecordSource::new(serve(router).await);

        let result = source.fetch_all().await;
        assert!(matches!(result, Err(DirectoryError::SourceUnavailable(_))));
    }

    #[tokio::test]
    async fn test_http_source_maps_connection_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpRecordSource::new(format!("http://{}/users", addr));
        let result = source.fetch_all().await;
        assert!(matches!(result, Err(DirectoryError::SourceUnavailable(_))));
    }

    #[tokio::test]
    async fn test_static_source_unavailable() {
        let source = StaticRecordSource::unavailable("offline");
        assert_eq!(
            source.fetch_all().await,
            Err(DirectoryError::SourceUnavailable("offline".to_string()))
        );
    }
}
