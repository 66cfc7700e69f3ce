//! Auth service configuration

use brew_shared::config::{CookieConfig, VerificationConfig};

/// Settings owned by the signup/verify flow itself
#[derive(Debug, Clone, Default)]
pub struct AuthServiceConfig {
    /// Session cookie settings for freshly bound sessions
    pub cookie: CookieConfig,
}

impl From<&VerificationConfig> for AuthServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            cookie: config.cookie.clone(),
        }
    }
}
