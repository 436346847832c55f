use serde_json::Value;

use crate::error::MatchingError;
use crate::models::{IndexScope, MatchRecord};
use crate::services::RawHit;

/// Score reported when the engine returns no score for a hit
pub const MISSING_SCORE: f64 = 0.0;

/// Reduce raw hits to `(id, score)` match records
///
/// Order is preserved exactly as the engine ranked it. A hit without a
/// usable integer identifier fails the whole batch.
pub fn project(scope: IndexScope, hits: &[RawHit]) -> Result<Vec<MatchRecord>, MatchingError> {
    hits.iter()
        .enumerate()
        .map(|(position, hit)| {
            Ok(MatchRecord {
                id: hit_id(scope, position, hit.id.as_ref())?,
                relevance_score: hit.score.unwrap_or(MISSING_SCORE),
            })
        })
        .collect()
}

fn hit_id(scope: IndexScope, position: usize, id: Option<&Value>) -> Result<i64, MatchingError> {
    let malformed = |detail: String| MatchingError::MalformedDocument {
        scope,
        subject: format!("hit {}", position),
        detail,
    };

    match id {
        Some(Value::String(s)) => s
            .parse::<i64>()
            .map_err(|_| malformed(format!("identifier '{}' is not an integer", s))),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| malformed(format!("identifier {} is not an integer", n))),
        Some(other) => Err(malformed(format!("unexpected identifier {}", other))),
        None => Err(malformed("missing identifier".to_string())),
    }
}
