use serde::{Deserialize, Serialize};
use std::fmt;

/// Named partition of the search index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexScope {
    Candidates,
    Jobs,
}

impl IndexScope {
    /// The scope matches are drawn from when querying from this one
    pub fn opposite(self) -> Self {
        match self {
            IndexScope::Candidates => IndexScope::Jobs,
            IndexScope::Jobs => IndexScope::Candidates,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IndexScope::Candidates => "candidates",
            IndexScope::Jobs => "jobs",
        }
    }
}

impl fmt::Display for IndexScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate document as stored in the candidates index
///
/// Every field is required; a document missing one is rejected rather than
/// defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub top_skills: Vec<String>,
    pub other_skills: Vec<String>,
    pub seniority: String,
    /// Minimum acceptable compensation
    pub salary_expectation: u64,
}

/// Job document as stored in the jobs index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub top_skills: Vec<String>,
    pub other_skills: Vec<String>,
    /// Seniority levels the job accepts
    pub seniorities: Vec<String>,
    /// Maximum compensation the job will pay
    pub max_salary: u64,
}

/// A single match drawn from the opposite index
///
/// `relevance_score` is the engine's native score. It is only comparable to
/// other scores from the same response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: i64,
    pub relevance_score: f64,
}
