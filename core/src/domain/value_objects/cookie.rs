//! Session cookie descriptor for the transport layer.
//!
//! The descriptor is a pure function of a session id and the cookie
//! configuration; it is produced only when the caller has to learn a
//! session id it did not already hold. The server never treats the value
//! as anything more than a rate-limit bucket key.

use brew_shared::config::{CookieConfig, SameSite};
use serde::{Deserialize, Serialize};

/// Cookie descriptor handed to the transport layer on a counted failure
/// of a freshly bound session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCookie {
    /// Cookie name
    pub name: String,

    /// Cookie value (the opaque session id)
    pub value: String,

    /// Lifetime in seconds
    pub max_age: u64,

    /// Path for which the cookie is valid
    pub path: String,

    /// Optional domain
    pub domain: Option<String>,

    /// Send only over HTTPS
    pub secure: bool,

    /// Hide from JavaScript access
    pub httponly: bool,

    /// Cross-site behavior
    pub samesite: SameSite,
}

impl SessionCookie {
    /// Builds a descriptor binding `session_id` under `config`
    pub fn for_session(session_id: &str, config: &CookieConfig) -> Self {
        Self {
            name: config.name.clone(),
            value: session_id.to_string(),
            max_age: config.max_age_seconds,
            path: config.path.clone(),
            domain: config.domain.clone(),
            secure: config.secure,
            httponly: config.httponly,
            samesite: config.samesite,
        }
    }
}
