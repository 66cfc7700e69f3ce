//! Domain-specific error types and error handling.
//!
//! Errors are raised at the point of detection and propagate unmodified
//! to the request boundary; `ErrorResponse` is the single translation
//! layer that turns them into transport-level payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Security-code and rate-limit errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Too many failed attempts. Retry in {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: u64 },

    #[error("The security code is invalid")]
    CodeNotFound,

    #[error("The security code has expired")]
    CodeExpired,

    #[error("The security code was already used")]
    CodeAlreadyUsed,

    #[error("Too many codes requested. Please try again later")]
    IssueLimitExceeded,
}

impl VerificationError {
    /// Whether this error is a rejected code submission, the only class
    /// of failure counted against the session's lockout budget.
    pub fn is_code_rejection(&self) -> bool {
        matches!(
            self,
            VerificationError::CodeNotFound
                | VerificationError::CodeExpired
                | VerificationError::CodeAlreadyUsed
        )
    }
}

/// Account-level errors raised by the signup/verify flow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User doesn't exist")]
    UserNotFound,

    #[error("User already verified")]
    UserAlreadyVerified,

    #[error("Failed to deliver the security code")]
    DeliveryFailure,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Storage or transport outage; surfaced as a generic server error,
    /// never silently swallowed
    #[error("Service unavailable: {message}")]
    Unavailable { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Unified error response structure for the request boundary
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Retry-After hint in seconds, present only for throttling errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            retry_after: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach a Retry-After hint
    pub fn with_retry_after(mut self, seconds: u64) -> Self {
        self.retry_after = Some(seconds);
        self
    }
}

impl From<&VerificationError> for ErrorResponse {
    fn from(err: &VerificationError) -> Self {
        // The three code rejections collapse into one client-visible
        // code so a caller cannot probe which field was wrong; the
        // messages differ, the code does not.
        let error_code = match err {
            VerificationError::RateLimited { .. } => "RATE_LIMITED",
            VerificationError::CodeNotFound
            | VerificationError::CodeExpired
            | VerificationError::CodeAlreadyUsed => "INVALID_SECURITY_CODE",
            VerificationError::IssueLimitExceeded => "RATE_LIMITED",
        };

        let response = ErrorResponse::new(error_code, err.to_string());
        match err {
            VerificationError::RateLimited { retry_after_secs } => {
                response.with_retry_after(*retry_after_secs)
            }
            _ => response,
        }
    }
}

impl From<&AuthError> for ErrorResponse {
    fn from(err: &AuthError) -> Self {
        let error_code = match err {
            AuthError::UserAlreadyExists => "USER_ALREADY_EXISTS",
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::UserAlreadyVerified => "USER_ALREADY_VERIFIED",
            AuthError::DeliveryFailure => "DELIVERY_FAILURE",
        };
        ErrorResponse::new(error_code, err.to_string())
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Verification(e) => e.into(),
            DomainError::Auth(e) => e.into(),
            DomainError::Unavailable { .. } => {
                ErrorResponse::new("SERVICE_UNAVAILABLE", "Service Unavailable")
            }
            DomainError::Internal { .. } => {
                ErrorResponse::new("INTERNAL_ERROR", "Internal Server Error")
            }
        }
    }
}
