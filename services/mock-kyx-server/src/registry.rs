//! In-memory store of Chainalysis KYA/KYT registrations
//!
//! A registration captures the parameters of a withdrawal attempt (KYA) or a
//! transfer (KYT) under a generated external id. The risk check itself runs
//! later, when alerts are requested. Each registration becomes "ready" (reports
//! `updatedAt`) after a random delay, imitating provider-side processing.

use crate::config::ChainalysisConfig;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use dashmap::DashMap;
use kyx_core::TransactionParams;
use rand::Rng;
use std::sync::Arc;
use tokio::time::interval;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationKind {
    Kya,
    Kyt,
}

#[derive(Debug, Clone)]
pub struct Registration {
    pub kind: RegistrationKind,
    pub params: TransactionParams,
    pub expires_at: DateTime<Utc>,
    /// Set once the registration is ready
    pub updated_at: Option<String>,
    /// Instant after which the registration becomes ready
    pub ready_at: Option<DateTime<Utc>>,
}

/// Result of a new registration
#[derive(Debug, Clone)]
pub struct Registered {
    pub external_id: String,
    pub updated_at: Option<String>,
}

pub struct RegistrationStore {
    entries: DashMap<String, Registration>,
    expiration: Duration,
    max_ready_delay_secs: u64,
}

impl RegistrationStore {
    pub fn new(config: &ChainalysisConfig) -> Self {
        Self {
            entries: DashMap::new(),
            expiration: Duration::milliseconds(config.expiration_time_ms as i64),
            max_ready_delay_secs: config.max_ready_delay_secs,
        }
    }

    /// Register with a random readiness delay
    pub fn register(
        &self,
        kind: RegistrationKind,
        params: TransactionParams,
        now: DateTime<Utc>,
    ) -> Registered {
        let delay_secs = rand::thread_rng().gen_range(0..=self.max_ready_delay_secs);
        self.register_with_delay(kind, params, delay_secs, now)
    }

    pub fn register_with_delay(
        &self,
        kind: RegistrationKind,
        params: TransactionParams,
        delay_secs: u64,
        now: DateTime<Utc>,
    ) -> Registered {
        let external_id = Uuid::new_v4().to_string();
        info!(
            "Generated random delay of {} seconds for {:?} request {}",
            delay_secs, kind, external_id
        );

        let (updated_at, ready_at) = if delay_secs == 0 {
            (Some(format_timestamp(now)), None)
        } else {
            (None, Some(now + Duration::seconds(delay_secs as i64)))
        };

        self.entries.insert(
            external_id.clone(),
            Registration {
                kind,
                params,
                expires_at: now + self.expiration,
                updated_at: updated_at.clone(),
                ready_at,
            },
        );

        Registered {
            external_id,
            updated_at,
        }
    }

    /// Readiness of a registration: `None` when unknown, `Some(None)` while
    /// still pending, `Some(Some(updated_at))` once ready.
    ///
    /// The first poll at or after the ready instant stamps `updated_at`, and
    /// later polls return that same stamp.
    pub fn poll_status(&self, external_id: &str, now: DateTime<Utc>) -> Option<Option<String>> {
        let mut entry = self.entries.get_mut(external_id)?;

        if entry.updated_at.is_none() {
            if let Some(ready_at) = entry.ready_at {
                if now >= ready_at {
                    debug!("Registration {} is now ready", external_id);
                    entry.updated_at = Some(format_timestamp(now));
                }
            }
        }

        Some(entry.updated_at.clone())
    }

    pub fn get(&self, external_id: &str) -> Option<Registration> {
        self.entries.get(external_id).map(|entry| entry.value().clone())
    }

    /// Copy of every registration with its external id
    pub fn snapshot(&self) -> Vec<(String, Registration)> {
        self.entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Remove registrations whose expiry has passed, returning how many
    pub fn cleanup_expired(&self, now: DateTime<Utc>) -> usize {
        let mut removed = 0;
        self.entries.retain(|external_id, registration| {
            if now > registration.expires_at {
                debug!("Removed expired registration with externalId: {}", external_id);
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// RFC 3339 UTC timestamp with a `Z` suffix
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Periodically drop expired registrations
pub async fn run_cleanup_scheduler(store: Arc<RegistrationStore>, every: std::time::Duration) {
    let mut interval = interval(every);

    info!("Registration cleanup scheduler started (every {:?})", every);

    loop {
        interval.tick().await;

        info!("Running scheduled cleanup of expired registrations");
        let removed = store.cleanup_expired(Utc::now());
        if removed > 0 {
            info!("Cleaned up {} expired registration entries", removed);
        }
    }
}
