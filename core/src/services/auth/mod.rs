//! Signup and email-verification flow.
//!
//! Orchestrates the user repository, the security-code service, the
//! per-session limiter and the delivery channel. The limiter gate runs
//! before any account or code lookup, so a locked-out session learns
//! nothing about accounts or codes.

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
pub use traits::CodeDelivery;
pub use types::{SignupResult, VerifyOutcome};
