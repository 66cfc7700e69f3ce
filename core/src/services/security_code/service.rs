//! Security-code service implementation

use std::sync::Arc;

use rand::Rng;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::security_code::{ContactType, DeliveryMethod, SecurityCode};
use crate::errors::{DomainResult, VerificationError};
use crate::repositories::security_code::SecurityCodeRepository;
use crate::services::clock::Clock;
use crate::services::mask_contact;

use super::config::SecurityCodeConfig;
use super::types::IssuedCode;

/// Issues and verifies one-time security codes
pub struct SecurityCodeService<R, C>
where
    R: SecurityCodeRepository,
    C: Clock,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: SecurityCodeConfig,
}

impl<R, C> SecurityCodeService<R, C>
where
    R: SecurityCodeRepository,
    C: Clock,
{
    pub fn new(repository: Arc<R>, clock: Arc<C>, config: SecurityCodeConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Code lifetime in seconds, for callers reporting expiry to clients
    pub fn expire_seconds(&self) -> u64 {
        self.config.expire_seconds
    }

    /// Issue a new code for a contact.
    ///
    /// Fails with `IssueLimitExceeded` when the contact already received
    /// `issue_retry_limit` codes within the issuance window. Otherwise a
    /// fresh code is generated, its digest persisted, and the plaintext
    /// returned for delivery.
    pub async fn issue(
        &self,
        contact: &str,
        contact_type: ContactType,
        method: DeliveryMethod,
        user_id: Uuid,
    ) -> DomainResult<IssuedCode> {
        self.check_issue_limit(contact).await?;

        let code = generate_code();
        let now = self.clock.now();
        let record = SecurityCode::new(
            contact.to_string(),
            contact_type,
            hash_code(&code),
            method,
            user_id,
            now,
        );
        let record = self.repository.create(record).await?;

        info!(
            event = "security_code_issued",
            contact = %mask_contact(contact),
            user_id = %user_id,
            record_id = %record.id,
            "Security code issued"
        );

        Ok(IssuedCode { record, code })
    }

    /// Check a submitted code for a user.
    ///
    /// Rejections are reported in a fixed order: a code that is both
    /// expired and consumed reads as expired. The record is returned
    /// untouched; consumption is [`mark_verified`](Self::mark_verified).
    pub async fn verify(&self, user_id: Uuid, code: &str) -> DomainResult<SecurityCode> {
        let record = self
            .repository
            .find_by_user_and_hash(user_id, &hash_code(code))
            .await?;

        let record = match record {
            Some(record) => record,
            None => {
                debug!(
                    event = "security_code_not_found",
                    user_id = %user_id,
                    "No matching security code"
                );
                return Err(VerificationError::CodeNotFound.into());
            }
        };

        if record.is_expired(self.clock.now(), self.config.expire_seconds) {
            debug!(
                event = "security_code_expired",
                user_id = %user_id,
                record_id = %record.id,
                "Security code past its validity window"
            );
            return Err(VerificationError::CodeExpired.into());
        }

        if record.is_verified {
            debug!(
                event = "security_code_reused",
                user_id = %user_id,
                record_id = %record.id,
                "Security code already consumed"
            );
            return Err(VerificationError::CodeAlreadyUsed.into());
        }

        Ok(record)
    }

    /// Consume a code record, persisting the Verified state
    pub async fn mark_verified(&self, mut record: SecurityCode) -> DomainResult<SecurityCode> {
        record.mark_verified(self.clock.now());
        self.repository.update(record).await
    }

    /// Revert a consumed record back to Pending.
    ///
    /// Compensating action for a paired update whose second half failed.
    pub async fn revert_verified(&self, mut record: SecurityCode) -> DomainResult<SecurityCode> {
        record.is_verified = false;
        record.verified_at = None;
        self.repository.update(record).await
    }

    async fn check_issue_limit(&self, contact: &str) -> DomainResult<()> {
        if self.config.issue_retry_limit == 0 {
            return Ok(());
        }

        let recent = self
            .repository
            .find_recent_for_contact(contact, self.config.issue_retry_limit)
            .await?;

        if recent.len() < self.config.issue_retry_limit as usize {
            return Ok(());
        }

        // Throttle only when the whole burst landed inside the window.
        let now = self.clock.now();
        let window = self.config.issue_window_seconds as i64;
        let oldest = match recent.last() {
            Some(record) => record,
            None => return Ok(()),
        };

        if (now - oldest.created_at).num_seconds() <= window {
            warn!(
                event = "security_code_issue_throttled",
                contact = %mask_contact(contact),
                recent = recent.len(),
                "Issuance throttled for contact"
            );
            return Err(VerificationError::IssueLimitExceeded.into());
        }

        Ok(())
    }
}

/// Generate a random six-digit code
fn generate_code() -> String {
    let code = rand::thread_rng().gen_range(100_000..=999_999);
    code.to_string()
}

/// One-way digest of a plaintext code, hex-encoded
pub(crate) fn hash_code(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod generation_tests {
    use super::*;
    use crate::domain::entities::security_code::CODE_LENGTH;

    #[test]
    fn test_generated_code_shape() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            let value: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn test_hash_is_stable_and_hex() {
        let a = hash_code("123456");
        let b = hash_code("123456");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, hash_code("123457"));
    }
}
