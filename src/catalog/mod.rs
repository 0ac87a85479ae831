pub mod models;

pub use models::{ApiRecord, BackendHealth, QueryRequest, QueryResponse, SearchFilters};
