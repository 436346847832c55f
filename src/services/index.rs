use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::query::BoolQuery;
use crate::models::IndexScope;

/// Errors raised by an index backend
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {status} - {body}")]
    ApiError { status: u16, body: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// One hit of a search response, before projection
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawHit {
    /// Document identifier; Elasticsearch reports it as a string
    #[serde(rename = "_id", default)]
    pub id: Option<Value>,
    /// Native relevance score, null when scoring is disabled
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source", default)]
    pub source: Option<Value>,
}

/// Read access to the candidates and jobs indices
///
/// Implementations are shared across concurrent requests and must be safe
/// for concurrent use.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Source document for `id`, or `None` when no such document exists
    async fn get_source(&self, scope: IndexScope, id: i64) -> Result<Option<Value>, IndexError>;

    /// Hits for `query` in relevance order, at most `limit` of them
    async fn search(
        &self,
        scope: IndexScope,
        query: &BoolQuery,
        limit: usize,
        include_source: bool,
    ) -> Result<Vec<RawHit>, IndexError>;

    /// Cheap reachability check
    async fn ping(&self) -> Result<(), IndexError>;
}
