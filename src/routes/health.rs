use actix_web::{web, HttpResponse, Responder};

use super::AppState;
use crate::models::HealthResponse;
use crate::services::IndexError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Map a cluster ping to the reported service status
fn health_status(ping: Result<(), IndexError>) -> &'static str {
    match ping {
        Ok(()) => "healthy",
        Err(e) => {
            tracing::warn!("Elasticsearch ping failed: {}", e);
            "degraded"
        }
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = health_status(state.matcher.index().ping().await);

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}
