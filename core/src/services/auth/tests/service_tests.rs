//! Unit tests for the signup/verify flow

use std::sync::Arc;

use crate::errors::{AuthError, DomainError, VerificationError};
use crate::repositories::security_code::MockSecurityCodeRepository;
use crate::repositories::user::{MockUserRepository, UserRepository};
use crate::services::auth::{AuthService, AuthServiceConfig, CodeDelivery, VerifyOutcome};
use crate::services::clock::MockClock;
use crate::services::limiter::{
    LimiterConfig, MemoryAttemptStore, VerificationLimiter,
};
use crate::services::security_code::{SecurityCodeConfig, SecurityCodeService};

use super::mocks::{FailingDelivery, RecordingDelivery};

type TestLimiter = VerificationLimiter<MemoryAttemptStore<MockClock>, MockClock>;

struct Harness<D: CodeDelivery> {
    service: AuthService<MockUserRepository, MockSecurityCodeRepository, TestLimiter, MockClock, D>,
    users: Arc<MockUserRepository>,
    delivery: Arc<D>,
    clock: Arc<MockClock>,
}

fn harness() -> Harness<RecordingDelivery> {
    harness_with(LimiterConfig::default(), Arc::new(RecordingDelivery::new()))
}

fn harness_with<D: CodeDelivery>(limiter_config: LimiterConfig, delivery: Arc<D>) -> Harness<D> {
    let clock = Arc::new(MockClock::from_system_time());
    let users = Arc::new(MockUserRepository::new());
    let code_repo = Arc::new(MockSecurityCodeRepository::new());
    let store = Arc::new(MemoryAttemptStore::new(clock.clone()));

    let codes = SecurityCodeService::new(
        code_repo,
        clock.clone(),
        SecurityCodeConfig::default(),
    );
    let limiter = Arc::new(VerificationLimiter::new(
        store,
        clock.clone(),
        limiter_config,
    ));

    let service = AuthService::new(
        users.clone(),
        codes,
        limiter,
        delivery.clone(),
        clock.clone(),
        AuthServiceConfig::default(),
    );

    Harness {
        service,
        users,
        delivery,
        clock,
    }
}

fn rejected(outcome: VerifyOutcome) -> (VerificationError, bool) {
    match outcome {
        VerifyOutcome::Rejected { error, cookie } => (error, cookie.is_some()),
        VerifyOutcome::Verified { .. } => panic!("expected rejection"),
    }
}

#[tokio::test]
async fn test_signup_creates_unverified_user_and_delivers_code() {
    let h = harness();

    let result = h.service.signup("a@b.com", "hash").await.unwrap();
    assert_eq!(result.expiry_seconds, 600);

    let user = h.users.find_by_email("a@b.com").await.unwrap().unwrap();
    assert_eq!(user.id, result.user_id);
    assert!(!user.is_verified());
    assert_eq!(h.delivery.sent_count(), 1);
}

#[tokio::test]
async fn test_signup_rejects_duplicate_email() {
    let h = harness();
    h.service.signup("a@b.com", "hash").await.unwrap();

    let result = h.service.signup("a@b.com", "hash2").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
    assert_eq!(h.delivery.sent_count(), 1);
}

#[tokio::test]
async fn test_signup_surfaces_delivery_failure() {
    let h = harness_with(LimiterConfig::default(), Arc::new(FailingDelivery));

    let result = h.service.signup("a@b.com", "hash").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::DeliveryFailure))
    ));
}

#[tokio::test]
async fn test_signup_then_verify_happy_path() {
    let h = harness();
    h.service.signup("a@b.com", "hash").await.unwrap();
    let code = h.delivery.last_code().unwrap();

    let outcome = h.service.verify_email("a@b.com", &code, None).await.unwrap();
    let user = match outcome {
        VerifyOutcome::Verified { user } => user,
        VerifyOutcome::Rejected { error, .. } => panic!("rejected: {}", error),
    };
    assert!(user.is_verified());

    let stored = h.users.find_by_email("a@b.com").await.unwrap().unwrap();
    assert!(stored.is_verified());
}

#[tokio::test]
async fn test_resend_issues_fresh_code() {
    let h = harness();
    h.service.signup("a@b.com", "hash").await.unwrap();

    h.service.resend_code("a@b.com").await.unwrap();
    assert_eq!(h.delivery.sent_count(), 2);

    // The most recent code is the one that verifies.
    let code = h.delivery.last_code().unwrap();
    let outcome = h.service.verify_email("a@b.com", &code, None).await.unwrap();
    assert!(outcome.is_verified());
}

#[tokio::test]
async fn test_resend_for_unknown_account() {
    let h = harness();
    let result = h.service.resend_code("nobody@b.com").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserNotFound))
    ));
}

#[tokio::test]
async fn test_resend_for_verified_account() {
    let h = harness();
    h.service.signup("a@b.com", "hash").await.unwrap();
    let code = h.delivery.last_code().unwrap();
    h.service.verify_email("a@b.com", &code, None).await.unwrap();

    let result = h.service.resend_code("a@b.com").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyVerified))
    ));
}

#[tokio::test]
async fn test_wrong_code_rejected_with_cookie_for_new_session() {
    let h = harness();
    h.service.signup("a@b.com", "hash").await.unwrap();

    let outcome = h
        .service
        .verify_email("a@b.com", "000000", None)
        .await
        .unwrap();
    let (error, has_cookie) = rejected(outcome);
    assert_eq!(error, VerificationError::CodeNotFound);
    assert!(has_cookie);
}

#[tokio::test]
async fn test_presented_session_gets_no_cookie() {
    let h = harness();
    h.service.signup("a@b.com", "hash").await.unwrap();

    let outcome = h
        .service
        .verify_email("a@b.com", "000000", Some("session-abc"))
        .await
        .unwrap();
    let (_, has_cookie) = rejected(outcome);
    assert!(!has_cookie);
}

#[tokio::test]
async fn test_expired_code_counts_as_rejection() {
    let h = harness();
    h.service.signup("a@b.com", "hash").await.unwrap();
    let code = h.delivery.last_code().unwrap();

    h.clock.advance_secs(601);
    let outcome = h
        .service
        .verify_email("a@b.com", &code, None)
        .await
        .unwrap();
    let (error, has_cookie) = rejected(outcome);
    assert_eq!(error, VerificationError::CodeExpired);
    assert!(has_cookie);
}

#[tokio::test]
async fn test_session_locks_out_after_budget_spent() {
    let config = LimiterConfig {
        max_attempts: 3,
        lockout_seconds: 60,
    };
    let h = harness_with(config, Arc::new(RecordingDelivery::new()));
    h.service.signup("a@b.com", "hash").await.unwrap();

    for _ in 0..3 {
        let outcome = h
            .service
            .verify_email("a@b.com", "000000", Some("s"))
            .await
            .unwrap();
        let (error, _) = rejected(outcome);
        assert_eq!(error, VerificationError::CodeNotFound);
    }

    // Even the correct code bounces off the lockout.
    let code = h.delivery.last_code().unwrap();
    let outcome = h
        .service
        .verify_email("a@b.com", &code, Some("s"))
        .await
        .unwrap();
    let (error, has_cookie) = rejected(outcome);
    assert!(matches!(error, VerificationError::RateLimited { .. }));
    assert!(!has_cookie);

    let user = h.users.find_by_email("a@b.com").await.unwrap().unwrap();
    assert!(!user.is_verified());
}

#[tokio::test]
async fn test_lockout_lapses_and_correct_code_verifies() {
    let config = LimiterConfig {
        max_attempts: 3,
        lockout_seconds: 60,
    };
    let h = harness_with(config, Arc::new(RecordingDelivery::new()));
    h.service.signup("a@b.com", "hash").await.unwrap();

    for _ in 0..3 {
        h.service
            .verify_email("a@b.com", "000000", Some("s"))
            .await
            .unwrap();
    }

    h.clock.advance_secs(61);
    let code = h.delivery.last_code().unwrap();
    let outcome = h
        .service
        .verify_email("a@b.com", &code, Some("s"))
        .await
        .unwrap();
    assert!(outcome.is_verified());
}

#[tokio::test]
async fn test_unknown_account_does_not_spend_attempt_budget() {
    let config = LimiterConfig {
        max_attempts: 3,
        lockout_seconds: 60,
    };
    let h = harness_with(config, Arc::new(RecordingDelivery::new()));
    h.service.signup("a@b.com", "hash").await.unwrap();

    for _ in 0..3 {
        let result = h
            .service
            .verify_email("nobody@b.com", "000000", Some("s"))
            .await;
        assert!(matches!(
            result,
            Err(DomainError::Auth(AuthError::UserNotFound))
        ));
    }

    // Budget untouched; a code rejection is still an ordinary rejection.
    let outcome = h
        .service
        .verify_email("a@b.com", "000000", Some("s"))
        .await
        .unwrap();
    let (error, _) = rejected(outcome);
    assert_eq!(error, VerificationError::CodeNotFound);
}

#[tokio::test]
async fn test_already_verified_account_is_an_account_error() {
    let h = harness();
    h.service.signup("a@b.com", "hash").await.unwrap();
    let code = h.delivery.last_code().unwrap();
    h.service.verify_email("a@b.com", &code, None).await.unwrap();

    let result = h.service.verify_email("a@b.com", &code, None).await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyVerified))
    ));
}

#[tokio::test]
async fn test_success_resets_session_budget() {
    let config = LimiterConfig {
        max_attempts: 3,
        lockout_seconds: 60,
    };
    let h = harness_with(config, Arc::new(RecordingDelivery::new()));
    h.service.signup("a@b.com", "hash").await.unwrap();
    h.service.signup("c@d.com", "hash").await.unwrap();
    let code_b = h.delivery.last_code().unwrap();

    // Two failures for the second account, then its success resets the
    // session; two more failures against the first account must not trip
    // the three-attempt lockout.
    for _ in 0..2 {
        h.service
            .verify_email("c@d.com", "000000", Some("s"))
            .await
            .unwrap();
    }
    let outcome = h
        .service
        .verify_email("c@d.com", &code_b, Some("s"))
        .await
        .unwrap();
    assert!(outcome.is_verified());

    for _ in 0..2 {
        let outcome = h
            .service
            .verify_email("a@b.com", "000000", Some("s"))
            .await
            .unwrap();
        let (error, _) = rejected(outcome);
        assert_eq!(error, VerificationError::CodeNotFound);
    }
}
