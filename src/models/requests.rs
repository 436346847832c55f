use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string accepted by the matching endpoints
///
/// `GET /candidates/{id}/jobs?limit=15`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchesQuery {
    /// Any integer parses; the range check rejects what is out of bounds
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl MatchesQuery {
    /// Requested limit, or `default_limit` when the caller gave none
    ///
    /// Call only after `validate` has passed.
    pub fn limit_or(&self, default_limit: u16) -> usize {
        self.limit
            .and_then(|limit| usize::try_from(limit).ok())
            .unwrap_or(default_limit as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::web;

    #[test]
    fn test_limit_bounds() {
        assert!(MatchesQuery { limit: Some(1) }.validate().is_ok());
        assert!(MatchesQuery { limit: Some(100) }.validate().is_ok());
        assert!(MatchesQuery { limit: Some(0) }.validate().is_err());
        assert!(MatchesQuery { limit: Some(101) }.validate().is_err());
        assert!(MatchesQuery { limit: Some(-1) }.validate().is_err());
        assert!(MatchesQuery { limit: Some(70000) }.validate().is_err());
        assert!(MatchesQuery { limit: None }.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_integers_parse() {
        let query = web::Query::<MatchesQuery>::from_query("limit=-1").unwrap();
        assert_eq!(query.limit, Some(-1));
        assert!(query.validate().is_err());

        let query = web::Query::<MatchesQuery>::from_query("limit=70000").unwrap();
        assert_eq!(query.limit, Some(70000));
        assert!(query.validate().is_err());

        assert!(web::Query::<MatchesQuery>::from_query("limit=many").is_err());
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(MatchesQuery::default().limit_or(10), 10);
        assert_eq!(MatchesQuery { limit: Some(15) }.limit_or(10), 15);
    }
}
