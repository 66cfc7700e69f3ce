//! Redis-backed attempt store.
//!
//! Two keys per session, both TTL-bound so abandoned sessions clean
//! themselves up:
//!
//! - `verify:attempts:{session}` -- failure counter, incremented atomically
//! - `verify:blocked:{session}`  -- lockout deadline as a unix timestamp
//!
//! The trait reports errors as plain strings; the core limiter maps them
//! to its unavailability error.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use brew_core::services::limiter::AttemptStore;

use super::redis_client::RedisClient;

const ATTEMPTS_PREFIX: &str = "verify:attempts";
const BLOCKED_PREFIX: &str = "verify:blocked";

/// Attempt store persisting counters and lockouts in Redis
#[derive(Clone)]
pub struct RedisAttemptStore {
    client: RedisClient,
}

impl RedisAttemptStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn attempts_key(&self, session_id: &str) -> String {
        self.client
            .make_key(&format!("{}:{}", ATTEMPTS_PREFIX, session_id))
    }

    fn blocked_key(&self, session_id: &str) -> String {
        self.client
            .make_key(&format!("{}:{}", BLOCKED_PREFIX, session_id))
    }
}

#[async_trait]
impl AttemptStore for RedisAttemptStore {
    async fn increment_attempts(&self, session_id: &str, ttl_seconds: u64) -> Result<i64, String> {
        self.client
            .increment(&self.attempts_key(session_id), Some(ttl_seconds))
            .await
            .map_err(|e| e.to_string())
    }

    async fn get_blocked_until(&self, session_id: &str) -> Result<Option<DateTime<Utc>>, String> {
        let value = self
            .client
            .get(&self.blocked_key(session_id))
            .await
            .map_err(|e| e.to_string())?;

        let raw = match value {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let timestamp: i64 = raw
            .parse()
            .map_err(|_| format!("malformed lockout timestamp: {}", raw))?;
        match Utc.timestamp_opt(timestamp, 0).single() {
            Some(deadline) => Ok(Some(deadline)),
            None => Err(format!("out-of-range lockout timestamp: {}", timestamp)),
        }
    }

    async fn set_blocked_until(
        &self,
        session_id: &str,
        blocked_until: DateTime<Utc>,
        ttl_seconds: u64,
    ) -> Result<(), String> {
        self.client
            .set_with_expiry(
                &self.blocked_key(session_id),
                &blocked_until.timestamp().to_string(),
                ttl_seconds,
            )
            .await
            .map_err(|e| e.to_string())
    }

    async fn clear(&self, session_id: &str) -> Result<(), String> {
        self.client
            .delete(&self.attempts_key(session_id))
            .await
            .map_err(|e| e.to_string())?;
        self.client
            .delete(&self.blocked_key(session_id))
            .await
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
