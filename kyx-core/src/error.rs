//! Error types for KYX risk checking

use thiserror::Error;

/// KYX core error
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied parameters that do not match the transaction shape
    #[error("Invalid transaction parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
