//! Per-session verification rate limiter.
//!
//! Sessions are opaque client-held tokens used purely for bucketing;
//! failed code submissions are counted per session and a spent budget
//! locks the session out for a fixed window. Buckets live in a TTL
//! key-value store and self-clean after the lockout window.

mod config;
pub mod memory;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::LimiterConfig;
pub use memory::MemoryAttemptStore;
pub use service::VerificationLimiter;
pub use traits::{AttemptStore, Limiter};
pub use types::LimiterDecision;
