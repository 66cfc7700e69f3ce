//! Mock attempt stores for limiter tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::services::limiter::AttemptStore;

/// Store whose every operation fails, simulating an outage
pub struct FailingAttemptStore;

#[async_trait]
impl AttemptStore for FailingAttemptStore {
    async fn increment_attempts(&self, _: &str, _: u64) -> Result<i64, String> {
        Err("connection refused".to_string())
    }

    async fn get_blocked_until(&self, _: &str) -> Result<Option<DateTime<Utc>>, String> {
        Err("connection refused".to_string())
    }

    async fn set_blocked_until(&self, _: &str, _: DateTime<Utc>, _: u64) -> Result<(), String> {
        Err("connection refused".to_string())
    }

    async fn clear(&self, _: &str) -> Result<(), String> {
        Err("connection refused".to_string())
    }
}
