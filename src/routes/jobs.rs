use actix_web::{web, HttpResponse};

use super::{log_failure, resolve_limit, AppState};
use crate::models::MatchesQuery;

/// Configure job routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/jobs")
            .route("/{id}", web::get().to(get_job))
            .route("/{id}/candidates", web::get().to(get_candidates_for_job)),
    );
}

/// GET /jobs/{id}
async fn get_job(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> actix_web::Result<HttpResponse> {
    let job_id = path.into_inner();

    match state.matcher.job(job_id).await {
        Ok(job) => Ok(HttpResponse::Ok().json(job)),
        Err(e) => {
            log_failure(&format!("Failed to fetch job {}", job_id), &e);
            Err(e.into())
        }
    }
}

/// GET /jobs/{id}/candidates?limit=10
async fn get_candidates_for_job(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<MatchesQuery>,
) -> actix_web::Result<HttpResponse> {
    let job_id = path.into_inner();
    let limit = match resolve_limit(&query, state.default_limit) {
        Ok(limit) => limit,
        Err(response) => return Ok(response),
    };

    tracing::info!("Finding candidates for job: {}, limit: {}", job_id, limit);

    match state.matcher.candidates_for_job(job_id, limit).await {
        Ok(matches) => {
            tracing::info!("Returning {} candidates for job {}", matches.len(), job_id);
            Ok(HttpResponse::Ok().json(matches))
        }
        Err(e) => {
            log_failure(&format!("Failed to match candidates for job {}", job_id), &e);
            Err(e.into())
        }
    }
}
