//! Wires the full verification stack against live Redis and MySQL.
//!
//! Reads configuration from the environment (and `.env` if present):
//! `DATABASE_URL`, `REDIS_URL`, and the `VERIFICATION_*` knobs.
//!
//! ```sh
//! cargo run -p brew_infra --example verification_demo
//! ```

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use brew_core::services::auth::{AuthService, AuthServiceConfig, VerifyOutcome};
use brew_core::services::clock::SystemClock;
use brew_core::services::limiter::{LimiterConfig, VerificationLimiter};
use brew_core::services::security_code::{SecurityCodeConfig, SecurityCodeService};
use brew_infra::cache::{RedisAttemptStore, RedisClient};
use brew_infra::database::{DatabasePool, MySqlSecurityCodeRepository, MySqlUserRepository};
use brew_infra::email::LogCodeDelivery;
use brew_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let redis = RedisClient::new(config.cache.clone())
        .await
        .context("connecting to Redis")?;
    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("connecting to MySQL")?;

    let clock = Arc::new(SystemClock);
    let users = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let codes = SecurityCodeService::new(
        Arc::new(MySqlSecurityCodeRepository::new(pool.get_pool().clone())),
        clock.clone(),
        SecurityCodeConfig::from(&config.verification),
    );
    let limiter = Arc::new(VerificationLimiter::new(
        Arc::new(RedisAttemptStore::new(redis)),
        clock.clone(),
        LimiterConfig::from(&config.verification),
    ));
    let auth = AuthService::new(
        users,
        codes,
        limiter,
        Arc::new(LogCodeDelivery::new()),
        clock,
        AuthServiceConfig::from(&config.verification),
    );

    let email = format!("demo+{}@example.com", uuid::Uuid::new_v4().simple());
    let signup = auth.signup(&email, "demo-password-hash").await?;
    info!(user_id = %signup.user_id, expiry = signup.expiry_seconds, "signed up");

    // A wrong code spends an attempt and binds a session cookie.
    match auth.verify_email(&email, "000000", None).await? {
        VerifyOutcome::Rejected { error, cookie } => {
            info!(%error, cookie = ?cookie.map(|c| c.name), "rejected as expected");
        }
        VerifyOutcome::Verified { .. } => unreachable!("wrong code cannot verify"),
    }

    pool.close().await;
    Ok(())
}
