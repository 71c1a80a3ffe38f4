//! Reference fixtures for the KYX risk check
//!
//! Each case mirrors a request the mock KYX server receives from its
//! clients, with the exact verdict those clients expect back.

use kyx_core::{RiskEvaluator, RiskVerdict, TokenAmount, TransactionParams};

fn transfer(from: &str, to: &str, amount: f64) -> TransactionParams {
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
fn normal_transaction_is_clear() {
    let verdict = RiskEvaluator::new().evaluate(&transfer(
        "0xabcdef1234567890",
        "0xfedcba0987654321",
        100.0,
    ));

    assert_eq!(verdict, RiskVerdict::clear());
}

#[test]
fn large_amount_is_flagged() {
    let verdict = RiskEvaluator::new().evaluate(&transfer(
        "0xabcdef1234567890",
        "0xfedcba0987654321",
        6000.0,
    ));

    assert_eq!(
        verdict,
        RiskVerdict::flagged("money laundry or fraud - Large amount transaction: 6000.0")
    );
}

#[test]
fn suspicious_sender_is_flagged() {
    let verdict = RiskEvaluator::new().evaluate(&transfer(
        "0x1abcdef1234567890",
        "0xfedcba0987654321",
        100.0,
    ));

    assert_eq!(
        verdict,
        RiskVerdict::flagged(
            "money laundry or fraud - Suspicious address pattern: 1abcdef1234567890"
        )
    );
}

#[test]
fn suspicious_target_address_is_flagged() {
    let params = TransactionParams {
        target_address: Some("0x1abcdef1234567890".to_string()),
        chain_id: Some(1),
        ..Default::default()
    };

    let verdict = RiskEvaluator::new().evaluate(&params);

    assert_eq!(
        verdict,
        RiskVerdict::flagged(
            "money laundry or fraud - Suspicious address pattern: 1abcdef1234567890"
        )
    );
}

#[test]
fn large_amount_with_tx_hash_is_flagged() {
    let mut params = transfer("0xabcdef1234567890", "0xfedcba0987654321", 8000.0);
    params.tx_hash = Some("0xabcdef1234567890abcdef1234567890".to_string());

    let verdict = RiskEvaluator::new().evaluate(&params);

    assert_eq!(
        verdict,
        RiskVerdict::flagged("money laundry or fraud - Large amount transaction: 8000.0")
    );
}

#[test]
fn json_fixtures_match_typed_fixtures() {
    let evaluator = RiskEvaluator::new();
    let cases = [
        (
            serde_json::json!({
                "fromAddress": "0xabcdef1234567890",
                "toAddress": "0xfedcba0987654321",
                "tokenName": "ETH",
                "tokenAmount": 6000.0,
                "chainId": 1
            }),
            "money laundry or fraud - Large amount transaction: 6000.0",
        ),
        (
            serde_json::json!({"targetAddress": "0x1abcdef1234567890", "chainId": 1}),
            "money laundry or fraud - Suspicious address pattern: 1abcdef1234567890",
        ),
        (
            serde_json::json!({"fromAddress": "0xabcdef", "tokenAmount": 100.0}),
            "",
        ),
    ];

    for (input, expected) in cases {
        let verdict = evaluator.evaluate_value(input).unwrap();
        assert_eq!(verdict.risk_detail, expected);
        assert_eq!(verdict.in_risk, !expected.is_empty());
    }
}
