use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::{ErrorResponse, IndexScope};
use crate::services::IndexError;

/// Failures of the fetch / build / execute / project pipeline
#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("ID '{id}' was not found in the index '{scope}'")]
    NotFound { id: i64, scope: IndexScope },

    #[error("Malformed document in index '{scope}' ({subject}): {detail}")]
    MalformedDocument {
        scope: IndexScope,
        subject: String,
        detail: String,
    },

    #[error("Either must or should clauses must be set")]
    InvalidQuery,

    #[error("Error fetching document: {0}")]
    IndexUnavailable(#[source] IndexError),

    #[error("Error fetching matches: {0}")]
    MatchingFailed(#[source] IndexError),
}

impl MatchingError {
    fn kind(&self) -> &'static str {
        match self {
            MatchingError::NotFound { .. } => "not_found",
            MatchingError::MalformedDocument { .. } => "malformed_document",
            MatchingError::InvalidQuery => "invalid_query",
            MatchingError::IndexUnavailable(_) => "index_unavailable",
            MatchingError::MatchingFailed(_) => "matching_failed",
        }
    }
}

impl ResponseError for MatchingError {
    fn status_code(&self) -> StatusCode {
        match self {
            MatchingError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}
