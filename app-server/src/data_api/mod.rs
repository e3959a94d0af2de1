use crate::config::data::DataApiConfig;
use crate::errors::ApiError;
use http::StatusCode;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;

// Reexport modules
pub mod articles;
pub mod files;

/// Client for the data API query endpoint.
///
/// The endpoint is injected from configuration so tests can point it at a
/// mock server. Cloning is cheap, the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct DataClient {
    client: Client,
    url: String,
}

impl DataClient {
    pub fn new(config: &DataApiConfig) -> Result<Self, QueryError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.query_timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        Ok(Self {
            client: builder.build()?,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send a query to the data API and decode the response into `R`.
    ///
    /// A single attempt is made. Non-success statuses carry the raw body back
    /// so callers can surface it verbatim.
    pub async fn send_query<R: DeserializeOwned>(&self, query: &Query) -> Result<R, QueryError> {
        debug!("Sending query to data API at: {}", self.url);
        let response = self.client.post(&self.url).json(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(QueryError::InvalidStatus { status, body });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// A request to the data API.
///
/// Serializes as `{"type": "select", "args": {...}}`.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", content = "args", rename_all = "lowercase")]
pub enum Query {
    Select(SelectArgs),
}

/// Table reference, either a bare name or a name qualified by its schema
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum TableRef {
    Name(String),
    Qualified { name: String, schema: String },
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SelectArgs {
    pub table: TableRef,
    pub columns: Vec<String>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub filter: Option<Map<String, Value>>,
}

impl SelectArgs {
    pub fn new(table: TableRef, columns: &[&str]) -> Self {
        Self {
            table,
            columns: columns.iter().map(|c| c.to_string()).collect(),
            filter: None,
        }
    }

    /// Add an equality condition on `column`
    pub fn filter_eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filter
            .get_or_insert_with(Map::new)
            .insert(column.to_string(), value.into());
        self
    }
}

/// Errors that can occur when querying the data API
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Failed to send request to data API: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("code: {}, data: {}", .status.as_u16(), .body)]
    InvalidStatus { status: StatusCode, body: String },
    #[error("Failed to parse data API response: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        log::error!("Data API query failed: {}", err);
        let detail = err.to_string();
        match err {
            QueryError::InvalidStatus { status, .. } => ApiError::new(detail, status),
            QueryError::RequestError(_) | QueryError::ParseError(_) => ApiError::internal(detail),
        }
    }
}
