//! Risk evaluation

use crate::{Result, RiskVerdict, TransactionParams};
use tracing::debug;

/// Amounts strictly above this are large transactions
pub const LARGE_AMOUNT_THRESHOLD: i64 = 5000;

/// Leading marker of a hex-encoded address
pub const HEX_PREFIX: &str = "0x";

/// Prefix (after the hex marker) that marks an address as suspicious
pub const SUSPICIOUS_ADDRESS_PREFIX: char = '1';

/// Base text of every risk detail
pub const RISK_DETAIL_BASE: &str = "money laundry or fraud";

/// Stateless risk evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskEvaluator;

impl RiskEvaluator {
    /// Create new risk evaluator
    pub fn new() -> Self {
        Self
    }

    /// Evaluate transaction parameters
    pub fn evaluate(&self, params: &TransactionParams) -> RiskVerdict {
        let large_amount = params
            .token_amount
            .filter(|amount| !amount.is_zero() && amount.exceeds(LARGE_AMOUNT_THRESHOLD));

        let flagged_address = params
            .candidate_addresses()
            .into_iter()
            .map(strip_hex_prefix)
            .find(|address| address.starts_with(SUSPICIOUS_ADDRESS_PREFIX));

        if large_amount.is_none() && flagged_address.is_none() {
            debug!("No risk criteria matched");
            return RiskVerdict::clear();
        }

        let mut detail = String::from(RISK_DETAIL_BASE);
        if let Some(amount) = large_amount {
            detail.push_str(&format!(" - Large amount transaction: {}", amount));
        }
        if let Some(address) = flagged_address {
            detail.push_str(&format!(" - Suspicious address pattern: {}", address));
        }

        debug!(risk_detail = %detail, "Risk criteria matched");
        RiskVerdict::flagged(detail)
    }

    /// Evaluate a dynamic JSON record using the camelCase field names of
    /// [`TransactionParams`].
    ///
    /// Fails when the value is not an object or a field has the wrong type.
    pub fn evaluate_value(&self, value: serde_json::Value) -> Result<RiskVerdict> {
        let params: TransactionParams = serde_json::from_value(value)?;
        Ok(self.evaluate(&params))
    }
}

/// Evaluate transaction parameters with the default evaluator
pub fn evaluate_risk(params: &TransactionParams) -> RiskVerdict {
    RiskEvaluator::new().evaluate(params)
}

/// Remove one leading `0x` marker, if present
pub fn strip_hex_prefix(address: &str) -> &str {
    address.strip_prefix(HEX_PREFIX).unwrap_or(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenAmount;
    use serde_json::json;

    fn params(from: &str, to: &str, amount: f64) -> TransactionParams {
        TransactionParams {
            from_address: Some(from.to_string()),
            to_address: Some(to.to_string()),
            token_name: Some("ETH".to_string()),
            token_amount: Some(TokenAmount::Float(amount)),
            chain_id: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn test_strip_hex_prefix() {
        assert_eq!(strip_hex_prefix("0x1abc"), "1abc");
        assert_eq!(strip_hex_prefix("0X1abc"), "0X1abc");
        assert_eq!(strip_hex_prefix("10xabc"), "10xabc");
        assert_eq!(strip_hex_prefix("0x0x1"), "0x1");
        assert_eq!(strip_hex_prefix(""), "");
    }

    #[test]
    fn test_empty_params_are_clear() {
        let verdict = RiskEvaluator::new().evaluate(&TransactionParams::default());
        assert_eq!(verdict, RiskVerdict::clear());
    }

    #[test]
    fn test_amount_boundary() {
        let evaluator = RiskEvaluator::new();

        let at_limit = evaluator.evaluate(&params("0xabc", "0xdef", 5000.0));
        assert!(!at_limit.in_risk);
        assert!(at_limit.risk_detail.is_empty());

        let above = evaluator.evaluate(&params("0xabc", "0xdef", 5000.5));
        assert!(above.in_risk);
        assert_eq!(
            above.risk_detail,
            "money laundry or fraud - Large amount transaction: 5000.5"
        );
    }

    #[test]
    fn test_integer_amount_renders_without_decimal() {
        let verdict = RiskEvaluator::new().evaluate(&TransactionParams {
            token_amount: Some(TokenAmount::Integer(7000)),
            ..Default::default()
        });
        assert_eq!(
            verdict.risk_detail,
            "money laundry or fraud - Large amount transaction: 7000"
        );
    }

    #[test]
    fn test_address_patterns() {
        let evaluator = RiskEvaluator::new();

        let bare = evaluator.evaluate(&TransactionParams::for_address("0x1"));
        assert_eq!(
            bare.risk_detail,
            "money laundry or fraud - Suspicious address pattern: 1"
        );

        let unprefixed = evaluator.evaluate(&TransactionParams::for_address("10xabc"));
        assert_eq!(
            unprefixed.risk_detail,
            "money laundry or fraud - Suspicious address pattern: 10xabc"
        );

        let no_match = evaluator.evaluate(&TransactionParams::for_address("x1abc"));
        assert!(!no_match.in_risk);

        let upper_marker = evaluator.evaluate(&TransactionParams::for_address("0X1abc"));
        assert!(!upper_marker.in_risk);
    }

    #[test]
    fn test_first_suspicious_address_wins() {
        let verdict = RiskEvaluator::new().evaluate(&TransactionParams {
            from_address: Some("0xabc".to_string()),
            to_address: Some("0x1to".to_string()),
            target_address: Some("0x1target".to_string()),
            ..Default::default()
        });
        assert_eq!(
            verdict.risk_detail,
            "money laundry or fraud - Suspicious address pattern: 1to"
        );
    }

    #[test]
    fn test_both_criteria_amount_first() {
        let verdict = RiskEvaluator::new().evaluate(&params("0x1abc", "0xdef", 9000.0));
        assert_eq!(
            verdict.risk_detail,
            concat!(
                "money laundry or fraud",
                " - Large amount transaction: 9000.0",
                " - Suspicious address pattern: 1abc"
            )
        );
    }

    #[test]
    fn test_evaluate_value() {
        let evaluator = RiskEvaluator::new();

        let verdict = evaluator
            .evaluate_value(json!({"targetAddress": "0x1abc", "requestType": "kya"}))
            .unwrap();
        assert!(verdict.in_risk);

        let err = evaluator.evaluate_value(json!({"tokenAmount": "lots"}));
        assert!(err.is_err());

        let err = evaluator.evaluate_value(json!("0x1abc"));
        assert!(err.is_err());
    }
}
