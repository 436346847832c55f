//! Talent Match - bidirectional candidate/job matching over Elasticsearch
//!
//! Given a candidate (or job), fetches its document and queries the opposite
//! index for entities compatible on at least one of salary, seniority or
//! top-skill overlap. Ranking is left to the search engine's native scoring.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{build_candidate_queries, build_job_queries, project, BoolQuery, Matcher, Predicate};
pub use error::MatchingError;
pub use models::{CandidateRecord, IndexScope, JobRecord, MatchRecord};
pub use services::{ElasticsearchClient, SearchIndex};
