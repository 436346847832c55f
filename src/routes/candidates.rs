use actix_web::{web, HttpResponse};

use super::{log_failure, resolve_limit, AppState};
use crate::models::MatchesQuery;

/// Configure candidate routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/candidates")
            .route("/{id}", web::get().to(get_candidate))
            .route("/{id}/jobs", web::get().to(get_jobs_for_candidate)),
    );
}

/// Get a candidate by id
///
/// GET /candidates/{id}
async fn get_candidate(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> actix_web::Result<HttpResponse> {
    let candidate_id = path.into_inner();

    match state.matcher.candidate(candidate_id).await {
        Ok(candidate) => Ok(HttpResponse::Ok().json(candidate)),
        Err(e) => {
            log_failure(&format!("Failed to fetch candidate {}", candidate_id), &e);
            Err(e.into())
        }
    }
}

/// Matching jobs for a candidate
///
/// GET /candidates/{id}/jobs?limit=10
///
/// A job qualifies when it satisfies at least one of salary, seniority or
/// top-skill overlap. Results are in the engine's relevance order.
async fn get_jobs_for_candidate(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<MatchesQuery>,
) -> actix_web::Result<HttpResponse> {
    let candidate_id = path.into_inner();
    let limit = match resolve_limit(&query, state.default_limit) {
        Ok(limit) => limit,
        Err(response) => return Ok(response),
    };

    tracing::info!("Finding jobs for candidate: {}, limit: {}", candidate_id, limit);

    match state.matcher.jobs_for_candidate(candidate_id, limit).await {
        Ok(matches) => {
            tracing::info!("Returning {} jobs for candidate {}", matches.len(), candidate_id);
            Ok(HttpResponse::Ok().json(matches))
        }
        Err(e) => {
            log_failure(&format!("Failed to match jobs for candidate {}", candidate_id), &e);
            Err(e.into())
        }
    }
}
