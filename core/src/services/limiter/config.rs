//! Configuration for the verification limiter

use brew_shared::config::VerificationConfig;

/// Configuration for the verification limiter
#[derive(Debug, Clone)]
pub struct LimiterConfig {
    /// Failed attempts allowed per session before lockout
    pub max_attempts: u32,
    /// Lockout duration in seconds; also the bucket TTL
    pub lockout_seconds: u64,
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            lockout_seconds: 900,
        }
    }
}

impl From<&VerificationConfig> for LimiterConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            lockout_seconds: config.lockout_seconds,
        }
    }
}
