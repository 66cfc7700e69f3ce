//! Security-code record entity for email/SMS account verification.
//!
//! A record holds the digest of a one-time numeric code tied to a user.
//! Its lifecycle is Pending -> Verified and Verified is terminal. Expiry
//! is a read-time predicate over `created_at`, never a stored state: a
//! record can sit expired-but-Pending indefinitely until an external
//! cleanup job removes it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the plaintext security code
pub const CODE_LENGTH: usize = 6;

/// Kind of contact the code was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactType {
    Email,
    Phone,
}

/// Channel the code is delivered through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryMethod {
    Email,
    Sms,
}

/// Security-code record entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityCode {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Contact the code was issued for (e.g. email address)
    pub contact: String,

    /// Kind of contact
    pub contact_type: ContactType,

    /// One-way digest of the plaintext code; plaintext is never stored
    pub code_hash: String,

    /// Delivery channel
    pub method: DeliveryMethod,

    /// User the code belongs to
    pub user_id: Uuid,

    /// Whether the code has been consumed
    pub is_verified: bool,

    /// Timestamp of consumption
    pub verified_at: Option<DateTime<Utc>>,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Soft-delete flag
    pub is_active: bool,
}

impl SecurityCode {
    /// Creates a new pending record
    pub fn new(
        contact: String,
        contact_type: ContactType,
        code_hash: String,
        method: DeliveryMethod,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            contact,
            contact_type,
            code_hash,
            method,
            user_id,
            is_verified: false,
            verified_at: None,
            created_at: now,
            is_active: true,
        }
    }

    /// Checks whether the code has outlived its validity window.
    ///
    /// Uses the total elapsed seconds of the delta, so a record created
    /// more than a day ago is expired even when the sub-day remainder is
    /// small.
    pub fn is_expired(&self, now: DateTime<Utc>, expire_seconds: u64) -> bool {
        let elapsed = (now - self.created_at).num_seconds();
        elapsed > expire_seconds as i64
    }

    /// Consumes the code. Pending -> Verified is the only transition.
    pub fn mark_verified(&mut self, now: DateTime<Utc>) {
        self.is_verified = true;
        self.verified_at = Some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn pending_code(created_at: DateTime<Utc>) -> SecurityCode {
        SecurityCode::new(
            "a@b.com".to_string(),
            ContactType::Email,
            "digest".to_string(),
            DeliveryMethod::Email,
            Uuid::new_v4(),
            created_at,
        )
    }

    #[test]
    fn test_new_record_is_pending() {
        let code = pending_code(Utc::now());
        assert!(!code.is_verified);
        assert!(code.verified_at.is_none());
        assert!(code.is_active);
    }

    #[test]
    fn test_not_expired_within_window() {
        let created = Utc::now();
        let code = pending_code(created);
        assert!(!code.is_expired(created + Duration::seconds(599), 600));
    }

    #[test]
    fn test_expired_after_window() {
        let created = Utc::now();
        let code = pending_code(created);
        assert!(code.is_expired(created + Duration::seconds(601), 600));
    }

    #[test]
    fn test_expiry_counts_whole_days() {
        // A day-old record must be expired even though the delta's
        // sub-day remainder is below the window.
        let created = Utc::now();
        let code = pending_code(created);
        assert!(code.is_expired(created + Duration::days(1) + Duration::seconds(5), 600));
    }

    #[test]
    fn test_mark_verified_is_terminal_state() {
        let created = Utc::now();
        let mut code = pending_code(created);

        let at = created + Duration::seconds(42);
        code.mark_verified(at);

        assert!(code.is_verified);
        assert_eq!(code.verified_at, Some(at));
    }

    #[test]
    fn test_serialization_round_trip() {
        let code = pending_code(Utc::now());
        let json = serde_json::to_string(&code).unwrap();
        let back: SecurityCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, back);
    }
}
