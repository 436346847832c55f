use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

use crate::core::query::{BoolQuery, Predicate, RangeBound};
use crate::models::IndexScope;
use crate::services::index::{IndexError, RawHit, SearchIndex};

/// Index names in Elasticsearch
#[derive(Debug, Clone)]
pub struct ElasticsearchIndices {
    pub candidates: String,
    pub jobs: String,
}

impl Default for ElasticsearchIndices {
    fn default() -> Self {
        Self {
            candidates: "candidates".to_string(),
            jobs: "jobs".to_string(),
        }
    }
}

/// Credentials sent with every request
#[derive(Debug, Clone)]
pub enum ElasticsearchAuth {
    None,
    Basic { username: String, password: String },
    ApiKey(String),
}

/// Elasticsearch REST client
///
/// Handles all communication with the search cluster:
/// - Fetching candidate and job documents by id
/// - Running boolean match queries
/// - Cluster reachability checks
///
/// The underlying `reqwest::Client` pools connections and is cheap to share.
pub struct ElasticsearchClient {
    base_url: String,
    indices: ElasticsearchIndices,
    auth: ElasticsearchAuth,
    client: Client,
}

impl ElasticsearchClient {
    /// Create a new Elasticsearch client
    pub fn new(
        base_url: String,
        indices: ElasticsearchIndices,
        auth: ElasticsearchAuth,
        timeout: Duration,
    ) -> Result<Self, IndexError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            indices,
            auth,
            client,
        })
    }

    fn index_name(&self, scope: IndexScope) -> &str {
        match scope {
            IndexScope::Candidates => &self.indices.candidates,
            IndexScope::Jobs => &self.indices.jobs,
        }
    }

    fn url(&self, scope: IndexScope, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(self.index_name(scope)),
            path
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            ElasticsearchAuth::None => request,
            ElasticsearchAuth::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            ElasticsearchAuth::ApiKey(key) => {
                request.header("Authorization", format!("ApiKey {}", key))
            }
        }
    }
}

#[async_trait]
impl SearchIndex for ElasticsearchClient {
    async fn get_source(&self, scope: IndexScope, id: i64) -> Result<Option<Value>, IndexError> {
        let url = self.url(scope, &format!("_source/{}", id));

        tracing::debug!("Fetching document {} from index '{}'", id, self.index_name(scope));

        let response = self.authorize(self.client.get(&url)).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read body".to_string());
                tracing::error!("Failed to fetch document {}: {} - {}", id, status, body);
                Err(IndexError::ApiError {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    async fn search(
        &self,
        scope: IndexScope,
        query: &BoolQuery,
        limit: usize,
        include_source: bool,
    ) -> Result<Vec<RawHit>, IndexError> {
        let url = self.url(scope, "_search");
        let body = search_body(query, limit, include_source);

        tracing::debug!("Searching index '{}': {}", self.index_name(scope), body);

        let response = self
            .authorize(self.client.post(&url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(IndexError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = response.json().await?;
        let hits = parse_hits(json)?;

        tracing::debug!("Search on '{}' returned {} hits", self.index_name(scope), hits.len());

        Ok(hits)
    }

    async fn ping(&self) -> Result<(), IndexError> {
        let url = self.base_url.trim_end_matches('/').to_string();
        let response = self.authorize(self.client.get(&url)).send().await?;

        if !response.status().is_success() {
            return Err(IndexError::ApiError {
                status: response.status().as_u16(),
                body: "cluster ping failed".to_string(),
            });
        }
        Ok(())
    }
}

/// Translate a predicate into Elasticsearch query DSL
pub fn predicate_to_dsl(predicate: &Predicate) -> Value {
    match predicate {
        Predicate::Range { field, bound, value } => {
            let op = match bound {
                RangeBound::Gte => "gte",
                RangeBound::Lte => "lte",
            };
            json!({ "range": { field.as_str(): { op: value } } })
        }
        Predicate::Membership { field, values } => match values.as_slice() {
            [single] => json!({ "term": { field.as_str(): single } }),
            _ => json!({ "terms": { field.as_str(): values } }),
        },
        Predicate::SetOverlap {
            field,
            terms,
            minimum_should_match,
        } => json!({
            "terms_set": {
                field.as_str(): {
                    "terms": terms,
                    "minimum_should_match": minimum_should_match,
                }
            }
        }),
    }
}

/// Full `_search` request body for a boolean query
pub fn search_body(query: &BoolQuery, limit: usize, include_source: bool) -> Value {
    let must: Vec<Value> = query.must_clauses().iter().map(predicate_to_dsl).collect();
    let should: Vec<Value> = query.should_clauses().iter().map(predicate_to_dsl).collect();

    json!({
        "query": {
            "bool": {
                "must": must,
                "should": should,
            }
        },
        "size": limit,
        "_source": include_source,
    })
}

/// Pull `hits.hits` out of a search response
pub fn parse_hits(mut response: Value) -> Result<Vec<RawHit>, IndexError> {
    let hits = response
        .pointer_mut("/hits/hits")
        .map(Value::take)
        .ok_or_else(|| IndexError::InvalidResponse("Missing hits array".into()))?;

    serde_json::from_value(hits)
        .map_err(|e| IndexError::InvalidResponse(format!("Failed to parse hits: {}", e)))
}
