use crate::catalog::{ApiRecord, BackendHealth, QueryRequest, QueryResponse, SearchFilters};
use crate::client::{CatalogBackend, ClientError};
use crate::config::BackendConfig;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::ConfigError("backend base_url is empty".to_string()));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::ConfigError(format!(
                "backend base_url must be an http(s) URL, got '{}'",
                base_url
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("{} responded with status {}", endpoint, status);
            return Err(ClientError::StatusError {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(|e| {
            error!("Failed to decode {} response: {}", endpoint, e);
            ClientError::DecodeError(e.to_string())
        })
    }
}

#[async_trait]
impl CatalogBackend for HttpCatalogClient {
    async fn search(&self, q: &str, filters: &SearchFilters) -> Result<Vec<ApiRecord>, ClientError> {
        if filters.is_empty() {
            debug!("GET /catalog/search q={:?}", q);
        } else {
            debug!("GET /catalog/search q={:?} filters={:?}", q, filters);
        }

        let response = self
            .client
            .get(self.url("/catalog/search"))
            .query(&[("q", q)])
            .query(&filters.to_params())
            .send()
            .await
            .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

        Self::read_json("/catalog/search", response).await
    }

    async fn ask(&self, query: &str) -> Result<QueryResponse, ClientError> {
        debug!("POST /query query={:?}", query);

        let request = QueryRequest {
            query: query.to_string(),
        };

        let response = self
            .client
            .post(self.url("/query"))
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

        Self::read_json("/query", response).await
    }

    async fn health(&self) -> Result<BackendHealth, ClientError> {
        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

        Self::read_json("/health", response).await
    }
}
