//! Risk check service shared by the provider handlers

use crate::models::TransactionCheckRequest;
use kyx_core::{RiskEvaluator, RiskVerdict, TransactionParams};
use tracing::info;

/// Runs the KYX risk evaluation for provider requests
pub struct RiskCheckService {
    evaluator: RiskEvaluator,
}

impl RiskCheckService {
    pub fn new() -> Self {
        Self {
            evaluator: RiskEvaluator::new(),
        }
    }

    /// Check a transaction submitted through a provider API
    pub fn check_transaction(&self, request: &TransactionCheckRequest) -> RiskVerdict {
        info!("Checking risk for transaction: {:?}", request);
        self.evaluator.evaluate(&TransactionParams::from(request))
    }

    /// Check previously captured parameters
    pub fn check_params(&self, params: &TransactionParams) -> RiskVerdict {
        info!("Checking risk with parameters: {:?}", params);
        self.evaluator.evaluate(params)
    }
}

impl Default for RiskCheckService {
    fn default() -> Self {
        Self::new()
    }
}
