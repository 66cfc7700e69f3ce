//! Signup and verification flow implementation

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::entities::security_code::{ContactType, DeliveryMethod};
use crate::domain::entities::user::User;
use crate::domain::value_objects::cookie::SessionCookie;
use crate::errors::{AuthError, DomainError, DomainResult, VerificationError};
use crate::repositories::security_code::SecurityCodeRepository;
use crate::repositories::user::UserRepository;
use crate::services::clock::Clock;
use crate::services::limiter::{Limiter, LimiterDecision};
use crate::services::mask_contact;
use crate::services::security_code::SecurityCodeService;

use super::config::AuthServiceConfig;
use super::traits::CodeDelivery;
use super::types::{SignupResult, VerifyOutcome};

/// Orchestrates signup and email verification
pub struct AuthService<U, R, L, C, D>
where
    U: UserRepository,
    R: SecurityCodeRepository,
    L: Limiter,
    C: Clock,
    D: CodeDelivery,
{
    users: Arc<U>,
    codes: SecurityCodeService<R, C>,
    limiter: Arc<L>,
    delivery: Arc<D>,
    clock: Arc<C>,
    config: AuthServiceConfig,
}

impl<U, R, L, C, D> AuthService<U, R, L, C, D>
where
    U: UserRepository,
    R: SecurityCodeRepository,
    L: Limiter,
    C: Clock,
    D: CodeDelivery,
{
    pub fn new(
        users: Arc<U>,
        codes: SecurityCodeService<R, C>,
        limiter: Arc<L>,
        delivery: Arc<D>,
        clock: Arc<C>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            users,
            codes,
            limiter,
            delivery,
            clock,
            config,
        }
    }

    /// Register a new account and send its first verification code.
    ///
    /// The password hash arrives pre-computed from the credential layer;
    /// this flow never sees a plaintext password.
    pub async fn signup(&self, email: &str, password_hash: &str) -> DomainResult<SignupResult> {
        if self.users.exists_by_email(email).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let user = User::new(email.to_string(), password_hash.to_string(), self.clock.now());
        let user = self.users.create(user).await?;

        info!(
            event = "user_signed_up",
            user_id = %user.id,
            email = %mask_contact(email),
            "New account created"
        );

        self.issue_and_deliver(&user).await
    }

    /// Send a fresh verification code to an existing unverified account
    pub async fn resend_code(&self, email: &str) -> DomainResult<SignupResult> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if user.is_verified() {
            return Err(AuthError::UserAlreadyVerified.into());
        }

        self.issue_and_deliver(&user).await
    }

    /// Submit a verification code for an account.
    ///
    /// The session limiter is consulted before anything else; a blocked
    /// session is rejected without touching user or code storage. Code
    /// rejections count against the session's attempt budget, account
    /// errors (unknown or already-verified user) do not.
    pub async fn verify_email(
        &self,
        email: &str,
        code: &str,
        session_token: Option<&str>,
    ) -> DomainResult<VerifyOutcome> {
        let (session_id, is_new) = match self.limiter.check_and_prepare(session_token).await? {
            LimiterDecision::Allowed { session_id, is_new } => (session_id, is_new),
            LimiterDecision::Blocked { retry_after_secs } => {
                return Ok(VerifyOutcome::Rejected {
                    error: VerificationError::RateLimited { retry_after_secs },
                    cookie: None,
                });
            }
        };

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if user.is_verified() {
            return Err(AuthError::UserAlreadyVerified.into());
        }

        let record = match self.codes.verify(user.id, code).await {
            Ok(record) => record,
            Err(DomainError::Verification(err)) if err.is_code_rejection() => {
                self.limiter.record_failure(&session_id).await?;
                let cookie = is_new
                    .then(|| SessionCookie::for_session(&session_id, &self.config.cookie));
                return Ok(VerifyOutcome::Rejected { error: err, cookie });
            }
            Err(other) => return Err(other),
        };

        let user = self.consume_and_verify(user, record).await?;
        self.limiter.reset(Some(&session_id)).await?;

        info!(
            event = "user_verified",
            user_id = %user.id,
            email = %mask_contact(email),
            "Account verified"
        );

        Ok(VerifyOutcome::Verified { user })
    }

    /// Consume the code record and flip the user to Verified as a pair.
    ///
    /// The code is consumed first; if the user update then fails, the
    /// consumption is reverted so the code stays usable on retry.
    async fn consume_and_verify(
        &self,
        mut user: User,
        record: crate::domain::entities::security_code::SecurityCode,
    ) -> DomainResult<User> {
        let consumed = self.codes.mark_verified(record).await?;

        user.verify(self.clock.now());
        match self.users.update(user).await {
            Ok(user) => Ok(user),
            Err(err) => {
                if let Err(revert_err) = self.codes.revert_verified(consumed).await {
                    error!(
                        event = "security_code_revert_failed",
                        error = %revert_err,
                        "Failed to revert consumed code after user update failure"
                    );
                }
                Err(err)
            }
        }
    }

    async fn issue_and_deliver(&self, user: &User) -> DomainResult<SignupResult> {
        let issued = self
            .codes
            .issue(
                &user.email,
                ContactType::Email,
                DeliveryMethod::Email,
                user.id,
            )
            .await?;

        if let Err(message) = self
            .delivery
            .deliver(&user.email, DeliveryMethod::Email, &issued.code)
            .await
        {
            warn!(
                event = "code_delivery_failed",
                user_id = %user.id,
                email = %mask_contact(&user.email),
                error = %message,
                "Security code delivery failed"
            );
            return Err(AuthError::DeliveryFailure.into());
        }

        Ok(SignupResult {
            user_id: user.id,
            expiry_seconds: self.codes.expire_seconds(),
        })
    }
}
