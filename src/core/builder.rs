use crate::core::query::{Predicate, RangeBound};
use crate::models::{CandidateRecord, JobRecord};

/// Overlap needed on top skills: two, or fewer when the querying side
/// lists fewer than two
#[inline]
pub fn skill_overlap_threshold(top_skills: &[String]) -> usize {
    top_skills.len().min(2)
}

/// Predicates for a candidate looking for jobs
///
/// Returns salary, seniority and skill-overlap predicates, in that order.
/// They are meant to be OR'd: a job qualifies by satisfying any one.
pub fn build_candidate_queries(candidate: &CandidateRecord) -> Vec<Predicate> {
    vec![
        Predicate::Range {
            field: "max_salary".to_string(),
            bound: RangeBound::Gte,
            value: candidate.salary_expectation,
        },
        Predicate::Membership {
            field: "seniorities".to_string(),
            values: vec![candidate.seniority.clone()],
        },
        Predicate::SetOverlap {
            field: "top_skills".to_string(),
            terms: candidate.top_skills.clone(),
            minimum_should_match: skill_overlap_threshold(&candidate.top_skills),
        },
    ]
}

/// Predicates for a job looking for candidates
///
/// Mirror of [`build_candidate_queries`] keyed off the candidate fields.
pub fn build_job_queries(job: &JobRecord) -> Vec<Predicate> {
    vec![
        Predicate::Range {
            field: "salary_expectation".to_string(),
            bound: RangeBound::Lte,
            value: job.max_salary,
        },
        Predicate::Membership {
            field: "seniority".to_string(),
            values: job.seniorities.clone(),
        },
        Predicate::SetOverlap {
            field: "top_skills".to_string(),
            terms: job.top_skills.clone(),
            minimum_should_match: skill_overlap_threshold(&job.top_skills),
        },
    ]
}
