//! End-to-end tests of the assembled mock KYX application

use actix_web::http::StatusCode;
use actix_web::{test, App};
use mock_kyx_server::config::{ChainalysisConfig, ProvidersConfig};
use mock_kyx_server::models::HealthResponse;
use mock_kyx_server::AppState;
use serde_json::{json, Value};

fn immediate_chainalysis() -> ChainalysisConfig {
    ChainalysisConfig {
        max_ready_delay_secs: 0,
        ..Default::default()
    }
}

#[actix_web::test]
async fn health_reports_version() {
    let state = AppState::new(&immediate_chainalysis());
    let providers = ProvidersConfig::default();
    let app =
        test::init_service(App::new().configure(|cfg| state.configure(cfg, &providers))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let health: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn disabled_provider_routes_are_absent() {
    let state = AppState::new(&immediate_chainalysis());
    let providers = ProvidersConfig {
        goplus_enabled: false,
        chainalysis_enabled: true,
    };
    let app =
        test::init_service(App::new().configure(|cfg| state.configure(cfg, &providers))).await;

    let req = test::TestRequest::get().uri("/address/0x1abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/kyt/v1/alerts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn providers_share_one_evaluator() {
    let state = AppState::new(&immediate_chainalysis());
    let providers = ProvidersConfig::default();
    let app =
        test::init_service(App::new().configure(|cfg| state.configure(cfg, &providers))).await;

    let req = test::TestRequest::get().uri("/address/0x1abcdef").to_request();
    let goplus: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(goplus["result"]["money_laundering"], "1");

    let req = test::TestRequest::post()
        .uri("/check")
        .set_json(json!({
            "fromAddress": "0x1abcdef",
            "toAddress": "0xfedcba",
            "tokenName": "ETH",
            "tokenAmount": 100.0,
            "chainId": 1
        }))
        .to_request();
    let chainalysis: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        chainalysis["result"]["risk_details"],
        "money laundry or fraud - Suspicious address pattern: 1abcdef"
    );
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let state = AppState::new(&immediate_chainalysis());
    let providers = ProvidersConfig::default();
    let app =
        test::init_service(App::new().configure(|cfg| state.configure(cfg, &providers))).await;

    let req = test::TestRequest::post()
        .uri("/api/kyt/v2/users/u/withdrawal-attempts")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Bad request");
}
