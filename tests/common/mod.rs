// Shared fixtures for the integration test binaries

#![allow(dead_code)]

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use talent_match::core::BoolQuery;
use talent_match::models::{CandidateRecord, IndexScope, JobRecord};
use talent_match::services::{IndexError, RawHit, SearchIndex};

/// In-process index that evaluates predicates locally
///
/// Scores a hit by the number of should-clauses it satisfies, which is the
/// shape of the engine's ranking without its term statistics. Ties keep id
/// order.
#[derive(Default)]
pub struct MemoryIndex {
    candidates: BTreeMap<i64, Value>,
    jobs: BTreeMap<i64, Value>,
}

impl MemoryIndex {
    pub fn insert<T: Serialize>(&mut self, scope: IndexScope, id: i64, document: &T) {
        let document = serde_json::to_value(document).unwrap();
        self.documents_mut(scope).insert(id, document);
    }

    pub fn document(&self, scope: IndexScope, id: i64) -> Option<&Value> {
        self.documents(scope).get(&id)
    }

    fn documents(&self, scope: IndexScope) -> &BTreeMap<i64, Value> {
        match scope {
            IndexScope::Candidates => &self.candidates,
            IndexScope::Jobs => &self.jobs,
        }
    }

    fn documents_mut(&mut self, scope: IndexScope) -> &mut BTreeMap<i64, Value> {
        match scope {
            IndexScope::Candidates => &mut self.candidates,
            IndexScope::Jobs => &mut self.jobs,
        }
    }
}

#[async_trait]
impl SearchIndex for MemoryIndex {
    async fn get_source(&self, scope: IndexScope, id: i64) -> Result<Option<Value>, IndexError> {
        Ok(self.documents(scope).get(&id).cloned())
    }

    async fn search(
        &self,
        scope: IndexScope,
        query: &BoolQuery,
        limit: usize,
        include_source: bool,
    ) -> Result<Vec<RawHit>, IndexError> {
        let mut scored: Vec<(i64, f64, &Value)> = self
            .documents(scope)
            .iter()
            .filter(|(_, doc)| query.evaluate(doc))
            .map(|(id, doc)| (*id, query.satisfied_should(doc) as f64, doc))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(id, score, doc)| RawHit {
                id: Some(json!(id.to_string())),
                score: Some(score),
                source: include_source.then(|| doc.clone()),
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), IndexError> {
        Ok(())
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn candidate(top_skills: &[&str], seniority: &str, salary_expectation: u64) -> CandidateRecord {
    CandidateRecord {
        top_skills: strings(top_skills),
        other_skills: vec![],
        seniority: seniority.to_string(),
        salary_expectation,
    }
}

pub fn job(top_skills: &[&str], seniorities: &[&str], max_salary: u64) -> JobRecord {
    JobRecord {
        top_skills: strings(top_skills),
        other_skills: vec![],
        seniorities: strings(seniorities),
        max_salary,
    }
}

const SKILLS: &[&str] = &[
    "Python", "AWS", "Docker", "Go", "Rust", "Java", "Kubernetes", "React", "SQL", "Terraform",
];
const SENIORITIES: &[&str] = &["junior", "midlevel", "senior"];

/// The candidate used by the end-to-end checks
pub fn candidate_201() -> CandidateRecord {
    candidate(&["Python", "AWS", "Docker"], "junior", 55000)
}

/// Deterministic job set with a spread of salaries, seniorities and skills
pub fn sample_jobs(count: i64) -> Vec<(i64, JobRecord)> {
    (1..=count)
        .map(|i| {
            let n = i as usize;
            let top_skills = [SKILLS[n % SKILLS.len()], SKILLS[(n * 3 + 1) % SKILLS.len()]];
            let seniorities = [SENIORITIES[n % SENIORITIES.len()]];
            let max_salary = 30000 + (n as u64 % 8) * 7500;
            (i, job(&top_skills, &seniorities, max_salary))
        })
        .collect()
}

/// Deterministic candidate set mirroring `sample_jobs`
pub fn sample_candidates(count: i64) -> Vec<(i64, CandidateRecord)> {
    (1..=count)
        .map(|i| {
            let n = i as usize;
            let top_skills = [
                SKILLS[(n * 7) % SKILLS.len()],
                SKILLS[(n + 2) % SKILLS.len()],
                SKILLS[(n * 5 + 3) % SKILLS.len()],
            ];
            let seniority = SENIORITIES[(n / 2) % SENIORITIES.len()];
            let salary_expectation = 40000 + (n as u64 % 6) * 10000;
            (100 + i, candidate(&top_skills, seniority, salary_expectation))
        })
        .collect()
}

/// Index holding candidate 201, `sample_candidates(30)` and `sample_jobs(40)`
pub fn seeded_index() -> MemoryIndex {
    let mut index = MemoryIndex::default();
    index.insert(IndexScope::Candidates, 201, &candidate_201());
    for (id, c) in sample_candidates(30) {
        index.insert(IndexScope::Candidates, id, &c);
    }
    for (id, j) in sample_jobs(40) {
        index.insert(IndexScope::Jobs, id, &j);
    }
    index
}
