use crate::models::goplus::{GoPlusAddressResult, GoPlusRiskEoaAddressResponse, IN_RISK};
use crate::models::MOCK_SERVICE_NAME;
use crate::service::RiskCheckService;
use actix_web::{web, HttpResponse};
use kyx_core::TransactionParams;
use std::sync::Arc;
use tracing::info;

// ===== Address Check (KYA) =====
pub async fn check_address(
    path: web::Path<String>,
    risk_service: web::Data<Arc<RiskCheckService>>,
) -> HttpResponse {
    let address = path.into_inner();
    info!("Received GoPlus address check request for address: {}", address);

    let verdict = risk_service.check_params(&TransactionParams::for_address(address));

    let result = if verdict.in_risk {
        let mut result = GoPlusAddressResult {
            data_source: Some(MOCK_SERVICE_NAME.to_string()),
            ..Default::default()
        };
        if verdict.risk_detail.contains("money laundry") {
            result.money_laundering = Some(IN_RISK.to_string());
        } else {
            result.cybercrime = Some(IN_RISK.to_string());
        }
        result
    } else {
        GoPlusAddressResult::all_clear(MOCK_SERVICE_NAME)
    };

    HttpResponse::Ok().json(GoPlusRiskEoaAddressResponse::ok(result))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/address/{address}", web::get().to(check_address));
}
