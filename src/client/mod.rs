pub mod http;

use crate::catalog::{ApiRecord, BackendHealth, QueryResponse, SearchFilters};
use async_trait::async_trait;
use std::error::Error;
use std::fmt;

pub use http::HttpCatalogClient;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    ConnectionError(String),
    StatusError { status: u16, message: String },
    DecodeError(String),
    ConfigError(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::ConnectionError(msg) => write!(f, "Backend connection error: {}", msg),
            ClientError::StatusError { status, message } => {
                write!(f, "Backend responded with status {}: {}", status, message)
            }
            ClientError::DecodeError(msg) => write!(f, "Backend response error: {}", msg),
            ClientError::ConfigError(msg) => write!(f, "Backend configuration error: {}", msg),
        }
    }
}

impl Error for ClientError {}

/// The remote catalog service: keyword search plus the natural-language agent.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    async fn search(&self, q: &str, filters: &SearchFilters) -> Result<Vec<ApiRecord>, ClientError>;

    async fn ask(&self, query: &str) -> Result<QueryResponse, ClientError>;

    async fn health(&self) -> Result<BackendHealth, ClientError>;
}
