//! In-memory attempt store backed by a HashMap.
//!
//! Honors the same TTL contract as the Redis-backed store so limiter
//! behavior can be unit-tested without a running Redis, with time
//! controlled through the injected clock.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::services::clock::Clock;

use super::traits::AttemptStore;

struct Counter {
    attempts: i64,
    expires_at: DateTime<Utc>,
}

struct Block {
    blocked_until: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// In-memory TTL attempt store for tests and single-process deployments
pub struct MemoryAttemptStore<C: Clock> {
    clock: Arc<C>,
    counters: Mutex<HashMap<String, Counter>>,
    blocks: Mutex<HashMap<String, Block>>,
}

impl<C: Clock> MemoryAttemptStore<C> {
    /// Create an empty store reading time from `clock`
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            counters: Mutex::new(HashMap::new()),
            blocks: Mutex::new(HashMap::new()),
        }
    }

    /// Number of live (unexpired) counters; test helper
    pub fn live_counters(&self) -> usize {
        let now = self.clock.now();
        self.counters
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.expires_at > now)
            .count()
    }
}

#[async_trait]
impl<C: Clock> AttemptStore for MemoryAttemptStore<C> {
    async fn increment_attempts(
        &self,
        session_id: &str,
        ttl_seconds: u64,
    ) -> Result<i64, String> {
        let now = self.clock.now();
        let mut counters = self.counters.lock().unwrap();

        let counter = counters
            .entry(session_id.to_string())
            .and_modify(|c| {
                if c.expires_at <= now {
                    // Key expired; the increment recreates it.
                    c.attempts = 0;
                    c.expires_at = now + Duration::seconds(ttl_seconds as i64);
                }
            })
            .or_insert_with(|| Counter {
                attempts: 0,
                expires_at: now + Duration::seconds(ttl_seconds as i64),
            });

        counter.attempts += 1;
        Ok(counter.attempts)
    }

    async fn get_blocked_until(
        &self,
        session_id: &str,
    ) -> Result<Option<DateTime<Utc>>, String> {
        let now = self.clock.now();
        let blocks = self.blocks.lock().unwrap();
        Ok(blocks
            .get(session_id)
            .filter(|b| b.expires_at > now)
            .map(|b| b.blocked_until))
    }

    async fn set_blocked_until(
        &self,
        session_id: &str,
        blocked_until: DateTime<Utc>,
        ttl_seconds: u64,
    ) -> Result<(), String> {
        let now = self.clock.now();
        let mut blocks = self.blocks.lock().unwrap();
        blocks.insert(
            session_id.to_string(),
            Block {
                blocked_until,
                expires_at: now + Duration::seconds(ttl_seconds as i64),
            },
        );
        Ok(())
    }

    async fn clear(&self, session_id: &str) -> Result<(), String> {
        self.counters.lock().unwrap().remove(session_id);
        self.blocks.lock().unwrap().remove(session_id);
        Ok(())
    }
}
