pub mod chainalysis;
pub mod goplus;

use kyx_core::{TokenAmount, TransactionParams};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Provider name reported in mock responses
pub const MOCK_SERVICE_NAME: &str = "Mock KYX Server";

// ===== Transaction Check Request =====
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCheckRequest {
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
    #[validate(required(message = "chainId cannot be null"))]
    pub chain_id: Option<i32>,
    pub tx_hash: Option<String>,
}

impl From<&TransactionCheckRequest> for TransactionParams {
    fn from(req: &TransactionCheckRequest) -> Self {
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

// ===== Health Check =====
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Network name for a chain id; unknown chains fall back to ethereum
pub fn network_for_chain(chain_id: Option<i32>) -> &'static str {
    match chain_id {
        Some(56) => "bsc",
        Some(137) => "polygon",
        _ => "ethereum",
    }
}
