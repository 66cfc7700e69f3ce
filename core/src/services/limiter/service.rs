//! Verification limiter implementation

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};
use crate::services::clock::Clock;

use super::config::LimiterConfig;
use super::traits::{AttemptStore, Limiter};
use super::types::LimiterDecision;

/// Rate limiter gating verification attempts per session.
///
/// Buckets are created lazily on the first recorded failure; a pre-check
/// against an unknown session only performs a lookup. Every bucket write
/// carries the lockout duration as its TTL so untouched state expires on
/// its own.
pub struct VerificationLimiter<S: AttemptStore, C: Clock> {
    /// TTL store holding the per-session counters
    store: Arc<S>,
    /// Time source for lockout arithmetic
    clock: Arc<C>,
    /// Limiter configuration
    config: LimiterConfig,
}

impl<S: AttemptStore, C: Clock> VerificationLimiter<S, C> {
    /// Create a new limiter
    pub fn new(store: Arc<S>, clock: Arc<C>, config: LimiterConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    fn resolve_session(session_token: Option<&str>) -> (String, bool) {
        match session_token {
            Some(token) if !token.is_empty() => (token.to_string(), false),
            _ => (Uuid::new_v4().to_string(), true),
        }
    }

    fn unavailable(err: String) -> DomainError {
        DomainError::Unavailable {
            message: format!("attempt store: {}", err),
        }
    }
}

#[async_trait]
impl<S: AttemptStore, C: Clock> Limiter for VerificationLimiter<S, C> {
    async fn check_and_prepare(
        &self,
        session_token: Option<&str>,
    ) -> DomainResult<LimiterDecision> {
        let (session_id, is_new) = Self::resolve_session(session_token);

        let blocked_until = self
            .store
            .get_blocked_until(&session_id)
            .await
            .map_err(Self::unavailable)?;

        if let Some(blocked_until) = blocked_until {
            let now = self.clock.now();
            if blocked_until > now {
                // num_seconds truncates; a sub-second remainder still
                // counts as one second of lockout.
                let retry_after_secs = ((blocked_until - now).num_seconds().max(0) as u64).max(1);
                tracing::warn!(
                    session_id = %session_id,
                    retry_after_secs,
                    event = "verification_locked_out",
                    "Verification attempt rejected for locked-out session"
                );
                return Ok(LimiterDecision::Blocked { retry_after_secs });
            }
        }

        Ok(LimiterDecision::Allowed { session_id, is_new })
    }

    async fn record_failure(&self, session_id: &str) -> DomainResult<()> {
        let attempts = self
            .store
            .increment_attempts(session_id, self.config.lockout_seconds)
            .await
            .map_err(Self::unavailable)?;

        tracing::debug!(
            session_id = %session_id,
            attempts,
            max_attempts = self.config.max_attempts,
            event = "verification_failure_recorded",
            "Recorded failed verification attempt"
        );

        if attempts >= i64::from(self.config.max_attempts) {
            let blocked_until =
                self.clock.now() + chrono::Duration::seconds(self.config.lockout_seconds as i64);
            self.store
                .set_blocked_until(session_id, blocked_until, self.config.lockout_seconds)
                .await
                .map_err(Self::unavailable)?;

            tracing::warn!(
                session_id = %session_id,
                attempts,
                lockout_seconds = self.config.lockout_seconds,
                event = "verification_session_locked",
                "Attempt budget spent, session locked out"
            );
        }

        Ok(())
    }

    async fn reset(&self, session_id: Option<&str>) -> DomainResult<()> {
        if let Some(session_id) = session_id {
            self.store
                .clear(session_id)
                .await
                .map_err(Self::unavailable)?;

            tracing::debug!(
                session_id = %session_id,
                event = "verification_session_reset",
                "Cleared rate-limit state for session"
            );
        }
        Ok(())
    }
}
