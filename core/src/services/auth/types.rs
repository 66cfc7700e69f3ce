//! Auth service result types

use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::cookie::SessionCookie;
use crate::errors::VerificationError;

/// Outcome of a successful signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupResult {
    /// Id of the newly created account
    pub user_id: Uuid,

    /// Lifetime of the delivered code in seconds, for the client prompt
    pub expiry_seconds: u64,
}

/// Outcome of a code submission.
///
/// A rejection is a normal outcome of the flow, not a transport error;
/// the optional cookie binds a session the client did not present.
#[derive(Debug, Clone)]
pub enum VerifyOutcome {
    /// Code accepted; the account is now verified
    Verified { user: User },

    /// Code rejected or the session is locked out
    Rejected {
        error: VerificationError,
        cookie: Option<SessionCookie>,
    },
}

impl VerifyOutcome {
    /// Whether the submission verified the account
    pub fn is_verified(&self) -> bool {
        matches!(self, VerifyOutcome::Verified { .. })
    }
}
