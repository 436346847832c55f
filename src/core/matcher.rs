use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::core::{
    builder::{build_candidate_queries, build_job_queries},
    projector::project,
    query::{BoolQuery, Predicate},
};
use crate::error::MatchingError;
use crate::models::{CandidateRecord, IndexScope, JobRecord, MatchRecord};
use crate::services::{RawHit, SearchIndex};

/// A record that lives in one index scope and can query the opposite one
pub trait Entity: DeserializeOwned {
    const SCOPE: IndexScope;

    /// OR-branches used to find matches for this entity
    fn match_predicates(&self) -> Vec<Predicate>;
}

impl Entity for CandidateRecord {
    const SCOPE: IndexScope = IndexScope::Candidates;

    fn match_predicates(&self) -> Vec<Predicate> {
        build_candidate_queries(self)
    }
}

impl Entity for JobRecord {
    const SCOPE: IndexScope = IndexScope::Jobs;

    fn match_predicates(&self) -> Vec<Predicate> {
        build_job_queries(self)
    }
}

/// Matching pipeline orchestrator
///
/// # Pipeline Stages
/// 1. Fetch the entity by id from its own index
/// 2. Build one predicate per matching dimension
/// 3. Execute them as should-clauses against the opposite index
/// 4. Project hits to `(id, score)` records
///
/// Holds no per-request state; clones share the same index handle.
#[derive(Clone)]
pub struct Matcher {
    index: Arc<dyn SearchIndex>,
}

impl Matcher {
    pub fn new(index: Arc<dyn SearchIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &Arc<dyn SearchIndex> {
        &self.index
    }

    /// Resolve `id` to a typed record from the entity's own index
    pub async fn fetch<E: Entity>(&self, id: i64) -> Result<E, MatchingError> {
        let source = self
            .index
            .get_source(E::SCOPE, id)
            .await
            .map_err(MatchingError::IndexUnavailable)?
            .ok_or(MatchingError::NotFound { id, scope: E::SCOPE })?;

        serde_json::from_value(source).map_err(|e| MatchingError::MalformedDocument {
            scope: E::SCOPE,
            subject: format!("id {}", id),
            detail: e.to_string(),
        })
    }

    /// Run `predicates` as OR'd clauses against `scope`, at most `limit` hits
    ///
    /// Only hit metadata is requested; document bodies stay on the server.
    pub async fn execute(
        &self,
        scope: IndexScope,
        predicates: Vec<Predicate>,
        limit: usize,
    ) -> Result<Vec<RawHit>, MatchingError> {
        let query = BoolQuery::should(predicates)?;
        self.execute_query(scope, &query, limit).await
    }

    /// Run an arbitrary must/should combination against `scope`
    pub async fn execute_query(
        &self,
        scope: IndexScope,
        query: &BoolQuery,
        limit: usize,
    ) -> Result<Vec<RawHit>, MatchingError> {
        let mut hits = self
            .index
            .search(scope, query, limit, false)
            .await
            .map_err(MatchingError::MatchingFailed)?;
        hits.truncate(limit);
        Ok(hits)
    }

    /// Full pipeline: matches in the opposite index for entity `id`
    pub async fn find_matches<E: Entity>(
        &self,
        id: i64,
        limit: usize,
    ) -> Result<Vec<MatchRecord>, MatchingError> {
        let entity: E = self.fetch(id).await?;
        let target = E::SCOPE.opposite();
        let hits = self.execute(target, entity.match_predicates(), limit).await?;
        project(target, &hits)
    }

    pub async fn candidate(&self, id: i64) -> Result<CandidateRecord, MatchingError> {
        self.fetch(id).await
    }

    pub async fn job(&self, id: i64) -> Result<JobRecord, MatchingError> {
        self.fetch(id).await
    }

    pub async fn jobs_for_candidate(
        &self,
        candidate_id: i64,
        limit: usize,
    ) -> Result<Vec<MatchRecord>, MatchingError> {
        self.find_matches::<CandidateRecord>(candidate_id, limit).await
    }

    pub async fn candidates_for_job(
        &self,
        job_id: i64,
        limit: usize,
    ) -> Result<Vec<MatchRecord>, MatchingError> {
        self.find_matches::<JobRecord>(job_id, limit).await
    }
}
