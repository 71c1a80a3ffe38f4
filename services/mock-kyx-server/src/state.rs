use crate::config::{ChainalysisConfig, ProvidersConfig};
use crate::handlers;
use crate::registry::RegistrationStore;
use crate::service::RiskCheckService;
use actix_web::web;
use std::sync::Arc;
use std::time::Instant;

/// Time the server started, reported by the health endpoint
#[derive(Debug, Clone, Copy)]
pub struct StartedAt(pub Instant);

/// Components shared by every worker
#[derive(Clone)]
pub struct AppState {
    pub risk_service: Arc<RiskCheckService>,
    pub registrations: Arc<RegistrationStore>,
    pub started_at: StartedAt,
}

impl AppState {
    pub fn new(chainalysis: &ChainalysisConfig) -> Self {
        Self {
            risk_service: Arc::new(RiskCheckService::new()),
            registrations: Arc::new(RegistrationStore::new(chainalysis)),
            started_at: StartedAt(Instant::now()),
        }
    }

    /// Register shared data, extractor settings and provider routes
    pub fn configure(&self, cfg: &mut web::ServiceConfig, providers: &ProvidersConfig) {
        cfg.app_data(web::Data::new(self.risk_service.clone()))
            .app_data(web::Data::new(self.registrations.clone()))
            .app_data(web::Data::new(self.started_at))
            .app_data(handlers::json_config())
            .app_data(handlers::query_config());

        handlers::configure_routes(cfg, providers);
    }
}
