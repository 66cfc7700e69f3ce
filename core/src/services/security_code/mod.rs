//! Security-code issuance and verification.
//!
//! Codes are six-digit numerics delivered out of band; only a digest is
//! persisted. Verification checks run in a fixed order (existence, then
//! expiry, then consumption) and never mutate the record; consuming a
//! code is a separate, caller-driven step.

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::SecurityCodeConfig;
pub use service::SecurityCodeService;
pub use types::IssuedCode;
