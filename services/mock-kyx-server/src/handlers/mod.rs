pub mod chainalysis;
pub mod goplus;

use crate::config::ProvidersConfig;
use crate::errors::KyxError;
use crate::models::HealthResponse;
use crate::state::StartedAt;
use actix_web::{web, HttpResponse};

// ===== Health Check =====
pub async fn health_check(started_at: web::Data<StartedAt>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: started_at.0.elapsed().as_secs(),
    })
}

/// Malformed or mistyped JSON bodies become 400 responses
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| KyxError::BadRequest(err.to_string()).into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| KyxError::BadRequest(err.to_string()).into())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, providers: &ProvidersConfig) {
    cfg.route("/health", web::get().to(health_check));

    if providers.goplus_enabled {
        cfg.configure(goplus::configure_routes);
    }
    if providers.chainalysis_enabled {
        cfg.configure(chainalysis::configure_routes);
    }
}
