//! Chainalysis KYT/KYA API shapes

use kyx_core::{TokenAmount, TransactionParams};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const ALERT_LEVEL_HIGH: &str = "HIGH";
pub const ALERT_CATEGORY: &str = "money_laundering_fraud";
pub const EXPOSURE_DIRECT: &str = "DIRECT";
pub const DIRECTION_SENT: &str = "SENT";
/// Transfer reference used when a registration has no recipient
pub const FALLBACK_TRANSFER_ADDRESS: &str = "0x1234567890";

fn fresh_uuid() -> String {
    Uuid::new_v4().to_string()
}

fn default_limit() -> i32 {
    100
}

// ===== Legacy Check =====
#[derive(Debug, Serialize, Deserialize)]
pub struct LegacyCheckResponse {
    pub status: String,
    pub result: LegacyCheckResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LegacyCheckResult {
    pub risk_detected: bool,
    pub risk_details: String,
}

// ===== KYA (Know Your Address) =====
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct KyaRequest {
    #[validate(
        required(message = "targetAddress cannot be empty"),
        custom(
            function = "crate::validation::not_blank",
            message = "targetAddress cannot be empty"
        )
    )]
    pub target_address: Option<String>,
    #[validate(required(message = "chainId cannot be null"))]
    pub chain_id: Option<i32>,
    #[serde(default = "fresh_uuid")]
    pub request_hash: String,
    #[serde(default = "fresh_uuid")]
    pub identifier: String,
    pub chain_name: Option<String>,
    pub asset_name: Option<String>,
    pub asset_amount: Option<Decimal>,
}

impl From<&KyaRequest> for TransactionParams {
    fn from(req: &KyaRequest) -> Self {
        TransactionParams {
            target_address: req.target_address.clone(),
            chain_id: req.chain_id.map(i64::from),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KyaRegisterResponse {
    pub updated_at: Option<String>,
    pub asset: Option<String>,
    pub network: Option<String>,
    pub address: Option<String>,
    pub attempt_identifier: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub usd_amount: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub asset_amount: Option<Decimal>,
    pub external_id: Option<String>,
}

// ===== KYT (Know Your Transaction) =====
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct KytRequest {
    #[validate(
        required(message = "fromAddress cannot be empty"),
        custom(
            function = "crate::validation::not_blank",
            message = "fromAddress cannot be empty"
        )
    )]
    pub from_address: Option<String>,
    #[validate(
        required(message = "toAddress cannot be empty"),
        custom(
            function = "crate::validation::not_blank",
            message = "toAddress cannot be empty"
        )
    )]
    pub to_address: Option<String>,
    #[validate(required(message = "chainId cannot be null"))]
    pub chain_id: Option<i32>,
    #[validate(
        required(message = "tokenName cannot be empty"),
        custom(
            function = "crate::validation::not_blank",
            message = "tokenName cannot be empty"
        )
    )]
    pub token_name: Option<String>,
    #[validate(required(message = "tokenAmount cannot be null"))]
    pub token_amount: Option<f64>,
    pub tx_hash: Option<String>,
    #[serde(default = "fresh_uuid")]
    pub request_hash: String,
    pub chain_name: Option<String>,
    pub asset_amount: Option<Decimal>,
}

impl From<&KytRequest> for TransactionParams {
    fn from(req: &KytRequest) -> Self {
        TransactionParams {
            from_address: req.from_address.clone(),
            to_address: req.to_address.clone(),
            token_name: req.token_name.clone(),
            token_amount: req.token_amount.map(TokenAmount::Float),
            chain_id: req.chain_id.map(i64::from),
            tx_hash: req.tx_hash.clone(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KytRegisterResponse {
    pub updated_at: Option<String>,
    pub asset: Option<String>,
    pub network: Option<String>,
    pub transfer_reference: Option<String>,
    pub tx: Option<String>,
    pub idx: Option<u64>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub usd_amount: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub asset_amount: Option<Decimal>,
    pub timestamp: Option<String>,
    pub output_address: Option<String>,
    pub external_id: Option<String>,
}

// ===== Alerts =====
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertResponse {
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub alert_level: String,
    pub category: String,
    pub service: String,
    pub external_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub alert_amount: Decimal,
    pub exposure_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlertMonitorQuery {
    #[serde(rename = "createdAt_lte")]
    pub end_time: Option<String>,
    #[serde(rename = "createdAt_gte")]
    pub start_time: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i32,
    #[serde(default)]
    pub offset: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertMonitorResponse {
    pub limit: i32,
    pub offset: i32,
    pub total: i32,
    pub data: Vec<AlertResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertResult {
    #[serde(with = "rust_decimal::serde::float")]
    pub alert_amount_usd: Decimal,
    pub category: String,
    pub transaction_hash: String,
    pub transfer_reference: String,
    pub exposure_type: String,
    pub transfer_reported_at: String,
    pub alert_identifier: String,
    pub direction: String,
}

impl AlertResult {
    pub fn is_sent(&self) -> bool {
        self.direction == DIRECTION_SENT
    }

    /// Address part of a `kind:address` transfer reference
    pub fn address(&self) -> &str {
        match self.transfer_reference.split(':').nth(1).filter(|a| !a.is_empty()) {
            Some(address) => address,
            None => &self.transfer_reference,
        }
    }
}
