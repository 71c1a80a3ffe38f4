//! Mock KYX API server
//!
//! Imitates the GoPlus and Chainalysis screening APIs on top of the
//! `kyx-core` risk evaluator.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod service;
pub mod state;
pub mod validation;

// Re-exports for convenience
pub use registry::RegistrationStore;
pub use service::RiskCheckService;
pub use state::AppState;
