use crate::errors::{KyxError, KyxResult};
use crate::models::chainalysis::*;
use crate::models::{network_for_chain, TransactionCheckRequest, MOCK_SERVICE_NAME};
use crate::registry::{format_timestamp, RegistrationKind, RegistrationStore};
use crate::service::RiskCheckService;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use kyx_core::TransactionParams;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Mock alert amount, in asset units and in USD
const ALERT_AMOUNT: i64 = 1000;
/// Mock asset-to-USD rate
const USD_RATE: i64 = 1000;

// ===== Legacy Transaction Check =====
pub async fn check_transaction(
    req: web::Json<TransactionCheckRequest>,
    risk_service: web::Data<Arc<RiskCheckService>>,
) -> KyxResult<HttpResponse> {
    info!("Received Chainalysis check request: {:?}", req);
    req.validate()?;

    let verdict = risk_service.check_transaction(&req);

    Ok(HttpResponse::Ok().json(LegacyCheckResponse {
        status: "success".to_string(),
        result: LegacyCheckResult {
            risk_detected: verdict.in_risk,
            risk_details: verdict.risk_detail,
        },
    }))
}

// ===== KYA: Register Withdrawal Attempt =====
pub async fn register_kya(
    path: web::Path<String>,
    req: web::Json<KyaRequest>,
    registrations: web::Data<Arc<RegistrationStore>>,
) -> KyxResult<HttpResponse> {
    let user_id = path.into_inner();
    let request = req.into_inner();
    info!(
        "Received Chainalysis KYA register request for userId: {}, request: {:?}",
        user_id, request
    );
    request.validate()?;

    // No risk check here; it runs when alerts are requested
    let registered = registrations.register(
        RegistrationKind::Kya,
        TransactionParams::from(&request),
        Utc::now(),
    );

    Ok(HttpResponse::Ok().json(KyaRegisterResponse {
        updated_at: registered.updated_at,
        asset: Some(request.asset_name.unwrap_or_else(|| "ETH".to_string())),
        network: Some(network_for_chain(request.chain_id).to_string()),
        address: request.target_address,
        attempt_identifier: Some(request.identifier),
        usd_amount: None,
        asset_amount: Some(request.asset_amount.unwrap_or(Decimal::ONE)),
        external_id: Some(registered.external_id),
    }))
}

// ===== KYA: Registration Status =====
pub async fn kya_status(
    path: web::Path<String>,
    registrations: web::Data<Arc<RegistrationStore>>,
) -> KyxResult<HttpResponse> {
    let external_id = path.into_inner();
    info!("Received Chainalysis KYA registration check for externalId: {}", external_id);

    let updated_at = poll_registration(&registrations, &external_id)?;

    Ok(HttpResponse::Ok().json(KyaRegisterResponse {
        updated_at,
        external_id: Some(external_id),
        ..Default::default()
    }))
}

// ===== KYA: Alerts =====
pub async fn kya_alerts(
    path: web::Path<String>,
    risk_service: web::Data<Arc<RiskCheckService>>,
    registrations: web::Data<Arc<RegistrationStore>>,
) -> HttpResponse {
    let external_id = path.into_inner();
    info!("Received Chainalysis KYA alerts request for externalId: {}", external_id);

    HttpResponse::Ok().json(alerts_for(&external_id, &risk_service, &registrations))
}

// ===== KYT: Register Transfer =====
pub async fn register_kyt(
    path: web::Path<String>,
    req: web::Json<KytRequest>,
    registrations: web::Data<Arc<RegistrationStore>>,
) -> KyxResult<HttpResponse> {
    let user_id = path.into_inner();
    let request = req.into_inner();
    info!(
        "Received Chainalysis KYT register request for userId: {}, request: {:?}",
        user_id, request
    );
    request.validate()?;

    // Price first; a rejected request must not leave a registration behind
    let out_of_range =
        || KyxError::BadRequest(format!("tokenAmount out of range: {:?}", request.token_amount));
    let asset_amount =
        Decimal::from_f64(request.token_amount.unwrap_or(0.0)).ok_or_else(out_of_range)?;
    let usd_amount = asset_amount
        .checked_mul(Decimal::from(USD_RATE))
        .ok_or_else(out_of_range)?;

    let now = Utc::now();
    let registered = registrations.register(
        RegistrationKind::Kyt,
        TransactionParams::from(&request),
        now,
    );

    Ok(HttpResponse::Ok().json(KytRegisterResponse {
        updated_at: registered.updated_at,
        asset: request.token_name,
        network: Some(network_for_chain(request.chain_id).to_string()),
        transfer_reference: request.to_address.as_ref().map(|to| format!("tx:{}", to)),
        tx: Some(request.tx_hash.unwrap_or_else(|| Uuid::new_v4().to_string())),
        idx: Some(0),
        usd_amount: Some(usd_amount),
        asset_amount: Some(asset_amount),
        timestamp: Some(format_timestamp(now)),
        output_address: request.to_address,
        external_id: Some(registered.external_id),
    }))
}

// ===== KYT: Registration Status =====
pub async fn kyt_status(
    path: web::Path<String>,
    registrations: web::Data<Arc<RegistrationStore>>,
) -> KyxResult<HttpResponse> {
    let external_id = path.into_inner();
    info!("Received Chainalysis KYT registration check for externalId: {}", external_id);

    let updated_at = poll_registration(&registrations, &external_id)?;

    Ok(HttpResponse::Ok().json(KytRegisterResponse {
        updated_at,
        external_id: Some(external_id),
        ..Default::default()
    }))
}

// ===== KYT: Alerts =====
pub async fn kyt_alerts(
    path: web::Path<String>,
    risk_service: web::Data<Arc<RiskCheckService>>,
    registrations: web::Data<Arc<RegistrationStore>>,
) -> HttpResponse {
    let external_id = path.into_inner();
    info!("Received Chainalysis KYT alerts request for externalId: {}", external_id);

    HttpResponse::Ok().json(alerts_for(&external_id, &risk_service, &registrations))
}

// ===== Alert Monitoring =====
pub async fn monitor_alerts(
    query: web::Query<AlertMonitorQuery>,
    risk_service: web::Data<Arc<RiskCheckService>>,
    registrations: web::Data<Arc<RegistrationStore>>,
) -> HttpResponse {
    let query = query.into_inner();
    info!(
        start = ?query.start_time,
        end = ?query.end_time,
        limit = query.limit,
        offset = query.offset,
        "Received Chainalysis monitoring request"
    );

    let data: Vec<AlertResult> = registrations
        .snapshot()
        .into_iter()
        .filter(|(_, registration)| risk_service.check_params(&registration.params).in_risk)
        .map(|(_, registration)| {
            let to_address = registration
                .params
                .to_address
                .as_deref()
                .unwrap_or(FALLBACK_TRANSFER_ADDRESS);

            AlertResult {
                alert_amount_usd: Decimal::from(ALERT_AMOUNT),
                category: ALERT_CATEGORY.to_string(),
                transaction_hash: Uuid::new_v4().to_string(),
                transfer_reference: format!("tx:{}", to_address),
                exposure_type: EXPOSURE_DIRECT.to_string(),
                transfer_reported_at: format_timestamp(Utc::now()),
                alert_identifier: Uuid::new_v4().to_string(),
                direction: DIRECTION_SENT.to_string(),
            }
        })
        .collect();

    HttpResponse::Ok().json(AlertMonitorResponse {
        limit: query.limit,
        offset: query.offset,
        total: data.len() as i32,
        data,
    })
}

fn poll_registration(
    registrations: &RegistrationStore,
    external_id: &str,
) -> KyxResult<Option<String>> {
    registrations
        .poll_status(external_id, Utc::now())
        .ok_or_else(|| KyxError::NotFound(format!("registration {}", external_id)))
}

/// Run the deferred risk check for a registration; unknown ids yield no alerts
fn alerts_for(
    external_id: &str,
    risk_service: &RiskCheckService,
    registrations: &RegistrationStore,
) -> AlertResponse {
    let Some(registration) = registrations.get(external_id) else {
        return AlertResponse::default();
    };

    if !risk_service.check_params(&registration.params).in_risk {
        return AlertResponse::default();
    }

    AlertResponse {
        alerts: vec![Alert {
            alert_level: ALERT_LEVEL_HIGH.to_string(),
            category: ALERT_CATEGORY.to_string(),
            service: MOCK_SERVICE_NAME.to_string(),
            external_id: external_id.to_string(),
            alert_amount: Decimal::from(ALERT_AMOUNT),
            exposure_type: EXPOSURE_DIRECT.to_string(),
        }],
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/check", web::post().to(check_transaction)).service(
        web::scope("/api/kyt")
            .route(
                "/v2/users/{user_id}/withdrawal-attempts",
                web::post().to(register_kya),
            )
            .route(
                "/v2/withdrawal-attempts/{external_id}",
                web::get().to(kya_status),
            )
            .route(
                "/v2/withdrawal-attempts/{external_id}/alerts",
                web::get().to(kya_alerts),
            )
            .route("/v2/users/{user_id}/transfers", web::post().to(register_kyt))
            .route("/v2/transfers/{external_id}", web::get().to(kyt_status))
            .route(
                "/v2/transfers/{external_id}/alerts",
                web::get().to(kyt_alerts),
            )
            .route("/v1/alerts", web::get().to(monitor_alerts)),
    );
}
