//! Configuration modules for the Brew backend.

pub mod cache;
pub mod database;
pub mod verification;

pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use verification::{CookieConfig, SameSite, VerificationConfig};

use serde::{Deserialize, Serialize};

/// Aggregated application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Database configuration
    pub database: DatabaseConfig,

    /// Redis cache configuration
    pub cache: CacheConfig,

    /// Verification and rate-limit configuration
    pub verification: VerificationConfig,
}

impl AppConfig {
    /// Load all sections from environment variables
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            verification: VerificationConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.verification.max_attempts, 5);
        assert_eq!(config.cache.url, "redis://localhost:6379");
    }
}
