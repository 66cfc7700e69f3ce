//! Security-code service configuration

use brew_shared::config::VerificationConfig;

/// Tunables for code lifetime and issuance throttling
#[derive(Debug, Clone)]
pub struct SecurityCodeConfig {
    /// Code lifetime in seconds
    pub expire_seconds: u64,

    /// Number of recent codes per contact the throttle inspects
    pub issue_retry_limit: u32,

    /// Window in seconds within which `issue_retry_limit` codes count as a burst
    pub issue_window_seconds: u64,
}

impl Default for SecurityCodeConfig {
    fn default() -> Self {
        Self {
            expire_seconds: 600,
            issue_retry_limit: 3,
            issue_window_seconds: 120,
        }
    }
}

impl From<&VerificationConfig> for SecurityCodeConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            expire_seconds: config.code_expire_seconds,
            issue_retry_limit: config.issue_retry_limit,
            issue_window_seconds: config.issue_window_seconds,
        }
    }
}
