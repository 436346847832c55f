// Route exports
pub mod candidates;
pub mod health;
pub mod jobs;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::core::Matcher;
use crate::error::MatchingError;
use crate::models::{ErrorResponse, MatchesQuery};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub default_limit: u16,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .configure(candidates::configure)
        .configure(jobs::configure);
}

/// JSON error for malformed query strings
#[derive(Debug)]
pub struct QueryError(ErrorResponse);

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.0.error, self.0.message)
    }
}

impl error::ResponseError for QueryError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.0)
    }
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    QueryError(ErrorResponse {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    })
    .into()
}

/// Validate the matching query string, resolving the effective limit
fn resolve_limit(query: &MatchesQuery, default_limit: u16) -> Result<usize, HttpResponse> {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for matches request: field_errors={:?}", errors);
        return Err(HttpResponse::UnprocessableEntity().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 422,
        }));
    }
    Ok(query.limit_or(default_limit))
}

/// Log a pipeline failure at a level matching its severity
fn log_failure(context: &str, err: &MatchingError) {
    match err {
        MatchingError::NotFound { .. } => tracing::info!("{}: {}", context, err),
        _ => tracing::error!("{}: {}", context, err),
    }
}
