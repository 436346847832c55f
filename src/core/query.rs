use serde_json::Value;
use std::collections::HashSet;

use crate::error::MatchingError;

/// Inclusive side of a range predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    /// field >= value
    Gte,
    /// field <= value
    Lte,
}

/// A single engine-agnostic match predicate
///
/// The set is closed: every backend translates these three shapes and
/// nothing else.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Numeric comparison against a document field
    Range {
        field: String,
        bound: RangeBound,
        value: u64,
    },
    /// Document field (scalar or list) contains at least one of `values`
    Membership { field: String, values: Vec<String> },
    /// At least `minimum_should_match` of `terms` appear in the document field
    SetOverlap {
        field: String,
        terms: Vec<String>,
        minimum_should_match: usize,
    },
}

impl Predicate {
    pub fn field(&self) -> &str {
        match self {
            Predicate::Range { field, .. }
            | Predicate::Membership { field, .. }
            | Predicate::SetOverlap { field, .. } => field,
        }
    }

    /// Evaluate the predicate against a raw source document
    ///
    /// Mirrors the engine semantics: a term matches a keyword list if any
    /// element equals it, and overlap counts distinct query terms. A missing
    /// field satisfies nothing except an overlap with a zero minimum.
    pub fn evaluate(&self, document: &Value) -> bool {
        let field = document.get(self.field());

        match self {
            Predicate::Range { bound, value, .. } => {
                let Some(actual) = field.and_then(Value::as_f64) else {
                    return false;
                };
                let value = *value as f64;
                match bound {
                    RangeBound::Gte => actual >= value,
                    RangeBound::Lte => actual <= value,
                }
            }
            Predicate::Membership { values, .. } => {
                let present = keywords(field);
                values.iter().any(|v| present.contains(v.as_str()))
            }
            Predicate::SetOverlap {
                terms,
                minimum_should_match,
                ..
            } => {
                if *minimum_should_match == 0 {
                    return true;
                }
                let present = keywords(field);
                let matched = terms
                    .iter()
                    .map(String::as_str)
                    .filter(|t| present.contains(t))
                    .collect::<HashSet<_>>()
                    .len();
                matched >= *minimum_should_match
            }
        }
    }
}

/// Collect the string values of a scalar or list field
fn keywords(field: Option<&Value>) -> HashSet<&str> {
    match field {
        Some(Value::String(s)) => HashSet::from([s.as_str()]),
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => HashSet::new(),
    }
}

/// Boolean combination of predicates
///
/// `must` clauses are AND'd, `should` clauses are OR'd. At least one of the
/// two lists is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct BoolQuery {
    must: Vec<Predicate>,
    should: Vec<Predicate>,
}

impl BoolQuery {
    pub fn new(must: Vec<Predicate>, should: Vec<Predicate>) -> Result<Self, MatchingError> {
        if must.is_empty() && should.is_empty() {
            return Err(MatchingError::InvalidQuery);
        }
        Ok(Self { must, should })
    }

    /// Query made only of OR'd clauses
    pub fn should(should: Vec<Predicate>) -> Result<Self, MatchingError> {
        Self::new(Vec::new(), should)
    }

    pub fn must_clauses(&self) -> &[Predicate] {
        &self.must
    }

    pub fn should_clauses(&self) -> &[Predicate] {
        &self.should
    }

    /// Whether a document satisfies every must clause and, when should
    /// clauses exist, at least one of them
    pub fn evaluate(&self, document: &Value) -> bool {
        self.must.iter().all(|p| p.evaluate(document))
            && (self.should.is_empty() || self.should.iter().any(|p| p.evaluate(document)))
    }

    /// Number of should clauses the document satisfies
    pub fn satisfied_should(&self, document: &Value) -> usize {
        self.should.iter().filter(|p| p.evaluate(document)).count()
    }
}
