use config::{ConfigError, Environment};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub log: LogConfig,
    pub providers: ProvidersConfig,
    pub chainalysis: ChainalysisConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogConfig {
    pub json: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub goplus_enabled: bool,
    pub chainalysis_enabled: bool,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            goplus_enabled: true,
            chainalysis_enabled: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChainalysisConfig {
    /// How long a registration is kept before cleanup
    pub expiration_time_ms: u64,
    pub cleanup_interval_secs: u64,
    /// Upper bound of the random delay before a registration reports `updatedAt`
    pub max_ready_delay_secs: u64,
}

impl Default for ChainalysisConfig {
    fn default() -> Self {
        Self {
            expiration_time_ms: 3_600_000, // 1 hour
            cleanup_interval_secs: 600,
            max_ready_delay_secs: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            // Server defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("server.workers", 4)?
            .set_default("log.json", false)?
            // Providers
            .set_default("providers.goplus_enabled", true)?
            .set_default("providers.chainalysis_enabled", true)?
            // Chainalysis registrations
            .set_default("chainalysis.expiration_time_ms", 3_600_000)?
            .set_default("chainalysis.cleanup_interval_secs", 600)?
            .set_default("chainalysis.max_ready_delay_secs", 10)?;

        builder = builder.add_source(Environment::with_prefix("KYX_SERVER").separator("__"));

        // Override from environment variables
        if let Ok(port) = env::var("SERVICE_PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load() {
        let config = Config::from_env().unwrap();

        assert!(config.server.workers > 0);
        assert_eq!(
            config.chainalysis.max_ready_delay_secs,
            ChainalysisConfig::default().max_ready_delay_secs
        );
    }
}
