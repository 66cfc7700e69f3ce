//! Verification and rate-limit configuration module

use serde::{Deserialize, Serialize};

/// Configuration for security-code verification and per-session rate limiting
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Failed attempts allowed per session before lockout
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Lockout duration in seconds once the attempt budget is spent
    #[serde(default = "default_lockout_seconds")]
    pub lockout_seconds: u64,

    /// Security-code lifetime in seconds
    #[serde(default = "default_code_expire_seconds")]
    pub code_expire_seconds: u64,

    /// Number of recent codes per contact inspected by the issuance throttle
    #[serde(default = "default_issue_retry_limit")]
    pub issue_retry_limit: u32,

    /// Window in seconds within which `issue_retry_limit` codes count as a burst
    #[serde(default = "default_issue_window_seconds")]
    pub issue_window_seconds: u64,

    /// Session cookie settings
    #[serde(default)]
    pub cookie: CookieConfig,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            lockout_seconds: default_lockout_seconds(),
            code_expire_seconds: default_code_expire_seconds(),
            issue_retry_limit: default_issue_retry_limit(),
            issue_window_seconds: default_issue_window_seconds(),
            cookie: CookieConfig::default(),
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_attempts: env_parse("VERIFICATION_MAX_ATTEMPTS", defaults.max_attempts),
            lockout_seconds: env_parse("VERIFICATION_LOCKOUT_SECONDS", defaults.lockout_seconds),
            code_expire_seconds: env_parse(
                "VERIFICATION_CODE_EXPIRE_SECONDS",
                defaults.code_expire_seconds,
            ),
            issue_retry_limit: env_parse("VERIFICATION_ISSUE_RETRY_LIMIT", defaults.issue_retry_limit),
            issue_window_seconds: env_parse(
                "VERIFICATION_ISSUE_WINDOW_SECONDS",
                defaults.issue_window_seconds,
            ),
            cookie: CookieConfig::from_env(),
        }
    }
}

/// Session cookie descriptor settings
///
/// The cookie lifetime defaults to the lockout duration so a blocked
/// session keeps its bucket for exactly the lockout window.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie name presented to the transport layer
    #[serde(default = "default_cookie_name")]
    pub name: String,

    /// Cookie lifetime in seconds
    #[serde(default = "default_lockout_seconds")]
    pub max_age_seconds: u64,

    /// Path for which the cookie is valid
    #[serde(default = "default_cookie_path")]
    pub path: String,

    /// Optional cookie domain
    #[serde(default)]
    pub domain: Option<String>,

    /// Send only over HTTPS
    #[serde(default = "default_secure")]
    pub secure: bool,

    /// Hide from JavaScript access
    #[serde(default = "default_httponly")]
    pub httponly: bool,

    /// Cross-site behavior
    #[serde(default)]
    pub samesite: SameSite,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: default_cookie_name(),
            max_age_seconds: default_lockout_seconds(),
            path: default_cookie_path(),
            domain: None,
            secure: default_secure(),
            httponly: default_httponly(),
            samesite: SameSite::default(),
        }
    }
}

impl CookieConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            name: std::env::var("VERIFICATION_COOKIE_NAME").unwrap_or(defaults.name),
            max_age_seconds: env_parse("VERIFICATION_COOKIE_MAX_AGE", defaults.max_age_seconds),
            secure: env_parse("VERIFICATION_COOKIE_SECURE", defaults.secure),
            ..defaults
        }
    }
}

/// SameSite attribute values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    Lax,
    Strict,
    None,
}

impl Default for SameSite {
    fn default() -> Self {
        SameSite::Lax
    }
}

impl SameSite {
    /// Attribute value as it appears in a Set-Cookie header
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Lax => "Lax",
            SameSite::Strict => "Strict",
            SameSite::None => "None",
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn default_max_attempts() -> u32 {
    5
}

fn default_lockout_seconds() -> u64 {
    900 // 15 minutes
}

fn default_code_expire_seconds() -> u64 {
    600 // 10 minutes
}

fn default_issue_retry_limit() -> u32 {
    3
}

fn default_issue_window_seconds() -> u64 {
    120
}

fn default_cookie_name() -> String {
    "brew_verification_session".to_string()
}

fn default_cookie_path() -> String {
    "/".to_string()
}

fn default_secure() -> bool {
    true
}

fn default_httponly() -> bool {
    true
}
