//! Traits for the limiter and its backing attempt store

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::DomainResult;

use super::types::LimiterDecision;

/// Capability interface for the verification limiter, so alternative
/// backing stores can be substituted (in-memory in unit tests, a TTL
/// store in production).
#[async_trait]
pub trait Limiter: Send + Sync {
    /// Bind or create a session and pre-check its lockout state
    async fn check_and_prepare(&self, session_token: Option<&str>)
        -> DomainResult<LimiterDecision>;

    /// Count one failed attempt against a session
    async fn record_failure(&self, session_id: &str) -> DomainResult<()>;

    /// Drop a session's bucket entirely; no-op when absent
    async fn reset(&self, session_id: Option<&str>) -> DomainResult<()>;
}

/// TTL-bearing per-session counter store.
///
/// `increment_attempts` must be atomic on the store side (e.g. Redis
/// INCR); the blocked-until flag is a plain idempotent write, so a
/// retried call never double-counts an attempt.
#[async_trait]
pub trait AttemptStore: Send + Sync {
    /// Atomically bump the failure counter, applying `ttl_seconds` when
    /// the key is created. Returns the new count.
    async fn increment_attempts(&self, session_id: &str, ttl_seconds: u64)
        -> Result<i64, String>;

    /// Read the lockout deadline, if any
    async fn get_blocked_until(
        &self,
        session_id: &str,
    ) -> Result<Option<DateTime<Utc>>, String>;

    /// Write the lockout deadline with the bucket TTL
    async fn set_blocked_until(
        &self,
        session_id: &str,
        blocked_until: DateTime<Utc>,
        ttl_seconds: u64,
    ) -> Result<(), String>;

    /// Remove the counter and any lockout deadline
    async fn clear(&self, session_id: &str) -> Result<(), String>;
}
