//! KYX risk checking core
//!
//! Screens a transaction or address against the mock KYX heuristics:
//! large transfer amounts and suspicious address prefixes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod evaluator;
pub mod types;

pub use error::{Error, Result};
pub use evaluator::{evaluate_risk, strip_hex_prefix, RiskEvaluator};
pub use types::*;
