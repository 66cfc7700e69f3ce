//! # Brew Shared
//!
//! Configuration structures shared across the Brew backend crates.
//! Services receive these structs at construction; nothing in here reads
//! ambient global state after startup.

pub mod config;

pub use config::{AppConfig, CacheConfig, CookieConfig, DatabaseConfig, VerificationConfig};
