//! Result types for the verification limiter

/// Outcome of a pre-check. Lockout is an expected, frequent outcome and
/// is modeled as a variant, not an error; `Err` from the limiter means
/// the backing store is unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimiterDecision {
    /// The attempt may proceed under this session
    Allowed {
        /// Session id, freshly generated when the caller presented none
        session_id: String,
        /// Whether the id was generated on this call; determines whether
        /// the caller must be told the id via cookie on failure
        is_new: bool,
    },
    /// The session is locked out
    Blocked {
        /// Seconds until the lockout lifts; always positive
        retry_after_secs: u64,
    },
}
