//! Core types for KYX risk checking

use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount of tokens moved by a transaction.
///
/// Keeps the numeric form the caller supplied, so an integer `6000` and a
/// float `6000.0` render differently in risk details.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenAmount {
    /// Whole-number amount
    Integer(i64),
    /// Floating-point amount
    Float(f64),
}

impl TokenAmount {
    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        match self {
            TokenAmount::Integer(v) => *v == 0,
            TokenAmount::Float(v) => *v == 0.0,
        }
    }

    /// Check if the amount is strictly greater than `threshold`
    pub fn exceeds(&self, threshold: i64) -> bool {
        match self {
            TokenAmount::Integer(v) => *v > threshold,
            TokenAmount::Float(v) => *v > threshold as f64,
        }
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenAmount::Integer(v) => write!(f, "{}", v),
            // Whole floats keep one decimal place: 6000.0, not 6000
            TokenAmount::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            TokenAmount::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for TokenAmount {
    fn from(v: i64) -> Self {
        TokenAmount::Integer(v)
    }
}

impl From<f64> for TokenAmount {
    fn from(v: f64) -> Self {
        TokenAmount::Float(v)
    }
}

/// Transaction parameters submitted for a risk check.
///
/// Every field is optional; an absent or `null` field behaves like an empty
/// string (addresses, names, hashes) or zero (amount, chain id).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionParams {
    /// Sender address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,

    /// Recipient address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,

    /// Address of interest, distinct from sender and recipient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_address: Option<String>,

    /// Token name (informational)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_name: Option<String>,

    /// Token amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_amount: Option<TokenAmount>,

    /// Chain id (informational)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<i64>,

    /// Transaction hash (informational)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
}

impl TransactionParams {
    /// Parameters for a single address check (KYA)
    pub fn for_address(target_address: impl Into<String>) -> Self {
        Self {
            target_address: Some(target_address.into()),
            ..Default::default()
        }
    }

    /// Addresses to inspect, in from, to, target order.
    ///
    /// Empty addresses are skipped. The target address is only added when it
    /// differs from both the sender and the recipient.
    pub fn candidate_addresses(&self) -> Vec<&str> {
        let mut candidates = Vec::with_capacity(3);

        if let Some(from) = non_empty(&self.from_address) {
            candidates.push(from);
        }
        if let Some(to) = non_empty(&self.to_address) {
            candidates.push(to);
        }
        if let Some(target) = non_empty(&self.target_address) {
            if !candidates.contains(&target) {
                candidates.push(target);
            }
        }

        candidates
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Outcome of a risk check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskVerdict {
    /// Whether any risk criterion matched
    pub in_risk: bool,

    /// Explanation of the matched criteria, empty when not in risk
    pub risk_detail: String,
}

impl RiskVerdict {
    /// Verdict with no risk
    pub fn clear() -> Self {
        Self::default()
    }

    /// Verdict flagged with the given detail
    pub fn flagged(risk_detail: impl Into<String>) -> Self {
        Self {
            in_risk: true,
            risk_detail: risk_detail.into(),
        }
    }
}
